// src/noyau/erreur.rs
//
// Erreurs du noyau.
// Chaque erreur est terminale pour l’évaluation en cours : pas de résultat partiel.
// C’est l’appelant (UI) qui décide du message affiché.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum CalcError {
    /// Opérande droite de `/` exactement nulle (0 ou -0).
    #[error("division par zéro")]
    DivisionByZero,

    /// Un jeton attendu numérique n’est pas un nombre.
    #[error("nombre invalide: '{literal}'")]
    ParseError { literal: String },

    /// Symbole hors de {+, -, *, /, %} arrivé jusqu’à la résolution.
    #[error("opérateur inconnu: '{symbol}'")]
    UnknownOperator { symbol: char },

    /// Opérandes / opérateurs mal alternés (ex: "5 +", "* 5").
    #[error("expression incomplète")]
    ExpressionIncomplete,

    /// Résultat intermédiaire non fini (dépassement f64).
    #[error("dépassement de capacité")]
    Overflow,
}

impl CalcError {
    /// Vrai pour l’erreur que l’UI affiche avec un message dédié.
    pub fn is_division_par_zero(&self) -> bool {
        matches!(self, CalcError::DivisionByZero)
    }
}
