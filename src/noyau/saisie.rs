// src/noyau/saisie.rs
//
// Contrat côté appelant, avant le noyau :
// - glyphes d’affichage -> opérateurs ASCII (× -> *, ÷ -> /)
// - entrée vide ou "0" => 0.0 sans tokenisation

use super::erreur::CalcError;
use super::eval::{eval_expression, evaluate, DemarcheNoyau};

/// Remplace les glyphes d’affichage par leurs équivalents ASCII.
pub fn normalize(expression: &str) -> String {
    expression.replace('×', "*").replace('÷', "/")
}

/// Vrai si l’entrée court-circuite à 0 (pas de passage par le tokenizer).
pub fn est_zero_trivial(expression: &str) -> bool {
    expression.is_empty() || expression == "0"
}

/// Calcul complet tel que l’UI l’appelle.
pub fn calculate(expression: &str) -> Result<f64, CalcError> {
    if est_zero_trivial(expression) {
        return Ok(0.0);
    }
    evaluate(&normalize(expression))
}

/// Même contrat que `calculate`, avec la démarche (vide si court-circuit).
pub fn calculate_detail(expression: &str) -> Result<(f64, DemarcheNoyau), CalcError> {
    if est_zero_trivial(expression) {
        return Ok((0.0, DemarcheNoyau::default()));
    }
    eval_expression(&normalize(expression))
}
