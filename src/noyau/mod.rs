//! Noyau de calcul (sans UI)
//!
//! Organisation interne :
//! - erreur.rs   : taxonomie des erreurs (division par zéro, parse, opérateur inconnu…)
//! - jetons.rs   : tokenisation (moins unaire absorbé dans le littéral)
//! - eval.rs     : partition + résolution en deux paliers (* / % puis + -)
//! - saisie.rs   : contrat appelant (glyphes × ÷, court-circuit "" / "0")
//! - format.rs   : affichage du résultat

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod saisie;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::CalcError;
pub use eval::{eval_expression, eval_tokens, evaluate, DemarcheNoyau};
pub use format::format_nombre;
pub use jetons::{tokenize, Tok};
pub use saisie::{calculate, calculate_detail, normalize};
