//! Calculatrice basique — noyau réutilisable (tokenizer + évaluateur à deux paliers).
//!
//! L’UI (egui/eframe) vit dans le binaire et n’appelle que `noyau`.

pub mod noyau;
