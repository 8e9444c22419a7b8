// src/noyau/jetons.rs

use std::fmt;

/// Alphabet des opérateurs reconnus par le tokenizer.
pub const OPERATEURS: &str = "+-*/%";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Texte brut du littéral (signe unaire inclus). Le parse f64 est fait par l’évaluateur.
    Nombre(String),

    // Un seul caractère opérateur.
    Op(char),
}

impl Tok {
    pub fn is_op(&self) -> bool {
        matches!(self, Tok::Op(_))
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Nombre(s) => f.write_str(s),
            Tok::Op(c) => write!(f, "{c}"),
        }
    }
}

fn is_operateur(c: char) -> bool {
    OPERATEURS.contains(c)
}

/// Tokenize une expression normalisée (opérateurs ASCII uniquement).
///
/// Règles:
/// - chiffres et '.' s’accumulent dans le littéral en cours
/// - '-' devient un signe (collé au littéral suivant) s’il est en tête
///   ou si le caractère non blanc précédent est lui-même un opérateur
/// - tout autre opérateur vide le littéral en cours puis sort seul
/// - les espaces sont ignorés
/// - les autres caractères restent dans le littéral (=> ParseError à l’évaluation)
///
/// NOTE: "3+-+5" donne [3, +, -, +, 5] : le '-' isolé sera refusé par l’évaluateur.
/// Comportement conservé tel quel.
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let mut courant = String::new();

    // dernier caractère non blanc vu (None = début de chaîne)
    let mut precedent: Option<char> = None;

    for c in s.chars() {
        if c.is_whitespace() {
            continue;
        }

        if is_operateur(c) {
            let unaire = c == '-' && precedent.is_none_or(is_operateur);
            if unaire {
                courant.push(c);
            } else {
                if !courant.is_empty() {
                    out.push(Tok::Nombre(std::mem::take(&mut courant)));
                }
                out.push(Tok::Op(c));
            }
        } else {
            courant.push(c);
        }

        precedent = Some(c);
    }

    if !courant.is_empty() {
        out.push(Tok::Nombre(courant));
    }

    out
}

/// Liste de jetons en texte (panneau “Démarche”).
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
