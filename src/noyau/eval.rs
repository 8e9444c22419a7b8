//! Noyau — évaluation
//!
//! jetons -> (opérandes, opérateurs) -> palier haut (* / %) -> palier bas (+ -) -> résultat
//!
//! Deux paliers fixes, gauche à droite dans chaque palier.
//! Pas de pile d’opérateurs, pas de parenthèses.

use super::erreur::CalcError;
use super::jetons::{format_tokens, tokenize, Tok};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
    Pourcent,
}

impl Op {
    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '*',
            Op::Divise => '/',
            Op::Pourcent => '%',
        }
    }

    fn palier(self) -> Palier {
        match self {
            Op::Fois | Op::Divise | Op::Pourcent => Palier::Haut,
            Op::Plus | Op::Moins => Palier::Bas,
        }
    }

    /// Applique l’opérateur à (gauche, droite).
    fn appliquer(self, a: f64, b: f64) -> Result<f64, CalcError> {
        let v = match self {
            Op::Plus => a + b,
            Op::Moins => a - b,
            Op::Fois => a * b,
            Op::Divise => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
            // “pourcentage de” : 200 % 10 = 200 * 0.10
            Op::Pourcent => a * (b / 100.0),
        };

        if v.is_finite() {
            Ok(v)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

impl TryFrom<char> for Op {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Op::Plus),
            '-' => Ok(Op::Moins),
            '*' => Ok(Op::Fois),
            '/' => Ok(Op::Divise),
            '%' => Ok(Op::Pourcent),
            other => Err(CalcError::UnknownOperator { symbol: other }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Palier {
    Haut,
    Bas,
}

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub palier_haut: String,
    pub palier_bas: String,
}

/// Point d’entrée : évalue une expression normalisée (opérateurs ASCII).
pub fn evaluate(expression: &str) -> Result<f64, CalcError> {
    eval_tokens(&tokenize(expression))
}

/// Évalue une suite de jetons déjà produite.
pub fn eval_tokens(tokens: &[Tok]) -> Result<f64, CalcError> {
    let (nombres, ops) = partitionner(tokens)?;
    let (nombres, ops) = resoudre_palier(nombres, ops, Palier::Haut)?;
    let (nombres, _) = resoudre_palier(nombres, ops, Palier::Bas)?;
    Ok(nombres.first().copied().unwrap_or(0.0))
}

/// Comme `evaluate`, mais garde la trace des listes après chaque palier.
pub fn eval_expression(expression: &str) -> Result<(f64, DemarcheNoyau), CalcError> {
    let tokens = tokenize(expression);
    let mut d = DemarcheNoyau {
        jetons: format_tokens(&tokens),
        ..Default::default()
    };

    let (nombres, ops) = partitionner(&tokens)?;

    let (nombres, ops) = resoudre_palier(nombres, ops, Palier::Haut)?;
    d.palier_haut = format_listes(&nombres, &ops);

    let (nombres, ops) = resoudre_palier(nombres, ops, Palier::Bas)?;
    d.palier_bas = format_listes(&nombres, &ops);

    Ok((nombres.first().copied().unwrap_or(0.0), d))
}

/// Sépare opérandes et opérateurs, puis vérifie l’alternance N / N-1.
fn partitionner(tokens: &[Tok]) -> Result<(Vec<f64>, Vec<Op>), CalcError> {
    let mut nombres = Vec::with_capacity(tokens.len() / 2 + 1);
    let mut ops = Vec::with_capacity(tokens.len() / 2);

    for t in tokens {
        match t {
            Tok::Op(c) => ops.push(Op::try_from(*c)?),
            Tok::Nombre(s) => nombres.push(parse_nombre(s)?),
        }
    }

    // Expression vide : défaut 0.0 en sortie.
    if nombres.is_empty() && ops.is_empty() {
        return Ok((nombres, ops));
    }

    // Un opérateur doit toujours être entouré de deux opérandes.
    let alterne = tokens
        .iter()
        .enumerate()
        .all(|(i, t)| t.is_op() == (i % 2 == 1));
    if !alterne || nombres.len() != ops.len() + 1 {
        return Err(CalcError::ExpressionIncomplete);
    }

    Ok((nombres, ops))
}

/// Littéral: '-' optionnel, chiffres, au plus un '.'.
/// On refuse tout ce que `f64::from_str` accepterait en plus (inf, NaN, 1e5…).
fn parse_nombre(s: &str) -> Result<f64, CalcError> {
    let invalide = || CalcError::ParseError {
        literal: s.to_string(),
    };

    let corps = s.strip_prefix('-').unwrap_or(s);
    if !corps.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(invalide());
    }

    let v = s.parse::<f64>().map_err(|_| invalide())?;
    if v.is_finite() {
        Ok(v)
    } else {
        // littéral hors de la plage f64 (plus de ~309 chiffres)
        Err(CalcError::Overflow)
    }
}

/// Résout un palier en une passe : on reconstruit de nouvelles listes.
///
/// Chaque opérateur du palier fusionne l’opérande accumulée avec la suivante;
/// les autres opérateurs sont recopiés avec leur opérande droite.
fn resoudre_palier(
    nombres: Vec<f64>,
    ops: Vec<Op>,
    palier: Palier,
) -> Result<(Vec<f64>, Vec<Op>), CalcError> {
    let mut it = nombres.into_iter();
    let Some(premier) = it.next() else {
        return Ok((Vec::new(), ops));
    };

    let mut out_nombres = Vec::with_capacity(ops.len() + 1);
    let mut out_ops = Vec::with_capacity(ops.len());
    out_nombres.push(premier);

    for (op, droite) in ops.into_iter().zip(it) {
        if op.palier() == palier {
            // out_nombres n’est jamais vide ici (premier poussé avant la boucle)
            if let Some(gauche) = out_nombres.last_mut() {
                *gauche = op.appliquer(*gauche, droite)?;
            }
        } else {
            out_ops.push(op);
            out_nombres.push(droite);
        }
    }

    Ok((out_nombres, out_ops))
}

fn format_listes(nombres: &[f64], ops: &[Op]) -> String {
    let n: Vec<String> = nombres.iter().map(|v| v.to_string()).collect();
    let o: Vec<String> = ops.iter().map(|op| op.symbole().to_string()).collect();
    format!("[{}] [{}]", n.join(", "), o.join(", "))
}
