//! Tests de propriétés : terminaison + déterminisme + précédence, sur expressions aléatoires.
//!
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - référence indépendante : somme de termes, chaque terme = produit gauche à droite

use std::time::{Duration, Instant};

use super::erreur::CalcError;
use super::eval::evaluate;
use super::saisie::calculate;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

const OPS: [char; 5] = ['+', '-', '*', '/', '%'];

fn gen_nombre(rng: &mut Rng) -> (String, f64) {
    // petits nombres, 0 inclus (pour provoquer des divisions par zéro)
    let v: f64 = match rng.pick(10) {
        0 => 0.0,
        1 => 0.5,
        2 => 2.25,
        n => f64::from(n * 3),
    };
    let v = if rng.pick(5) == 0 { -v } else { v };
    (v.to_string(), v)
}

/// Expression “à la calculatrice” : N nombres, N-1 opérateurs, espaces autour des opérateurs.
fn gen_expr(rng: &mut Rng, n: usize) -> (String, Vec<f64>, Vec<char>) {
    let mut texte = String::new();
    let mut nombres = Vec::with_capacity(n);
    let mut ops = Vec::with_capacity(n.saturating_sub(1));

    for i in 0..n {
        if i > 0 {
            let op = OPS[rng.pick(OPS.len() as u32) as usize];
            ops.push(op);
            if rng.coin() {
                texte.push_str(&format!(" {op} "));
            } else {
                texte.push(op);
            }
        }
        let (s, v) = gen_nombre(rng);
        texte.push_str(&s);
        nombres.push(v);
    }

    (texte, nombres, ops)
}

/* ------------------------ Référence ------------------------ */

fn appliquer_ref(a: f64, op: char, b: f64) -> Result<f64, CalcError> {
    match op {
        '*' => Ok(a * b),
        '/' if b == 0.0 => Err(CalcError::DivisionByZero),
        '/' => Ok(a / b),
        '%' => Ok(a * (b / 100.0)),
        '+' => Ok(a + b),
        '-' => Ok(a - b),
        other => Err(CalcError::UnknownOperator { symbol: other }),
    }
}

/// Termes séparés par + / -, puis somme gauche à droite.
fn reference(nombres: &[f64], ops: &[char]) -> Result<f64, CalcError> {
    let mut termes = vec![nombres[0]];
    let mut signes = Vec::new();

    for (op, &b) in ops.iter().zip(&nombres[1..]) {
        if matches!(op, '+' | '-') {
            signes.push(*op);
            termes.push(b);
        } else if let Some(t) = termes.last_mut() {
            *t = appliquer_ref(*t, *op, b)?;
        }
    }

    let mut acc = termes[0];
    for (s, &t) in signes.iter().zip(&termes[1..]) {
        acc = appliquer_ref(acc, *s, t)?;
    }
    Ok(acc)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn prop_conforme_a_la_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let n = 1 + rng.pick(8) as usize;
        let (expr, nombres, ops) = gen_expr(&mut rng, n);

        let obtenu = evaluate(&expr);
        let attendu = reference(&nombres, &ops);
        assert_eq!(obtenu, attendu, "expr={expr:?}");

        match obtenu {
            Ok(v) => {
                assert!(v.is_finite(), "expr={expr:?} v={v}");
                seen_ok += 1;
            }
            Err(CalcError::DivisionByZero) => seen_div0 += 1,
            Err(e) => panic!("erreur non attendue: expr={expr:?} err={e}"),
        }
    }

    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
    assert!(seen_div0 > 0, "aucune division par zéro vue");
}

#[test]
fn prop_idempotence() {
    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        let (expr, _, _) = gen_expr(&mut rng, 6);
        let a = calculate(&expr);
        let b = calculate(&expr);
        assert_eq!(a, b, "expr={expr:?}");
    }
}

#[test]
fn prop_entrees_quelconques_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // alphabet volontairement sale : opérateurs collés, points multiples, lettres, glyphes
    const ALPHABET: [&str; 12] = ["1", "0", ".", "+", "-", "*", "/", "%", " ", "×", "÷", "x"];

    let mut rng = Rng::new(42);

    for _ in 0..500 {
        budget(t0, max);

        let len = rng.pick(12) as usize;
        let expr: String = (0..len)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        // Contrat : nombre fini ou erreur définie, jamais de panique.
        if let Ok(v) = calculate(&expr) {
            assert!(v.is_finite(), "expr={expr:?} v={v}");
        }
    }
}

#[test]
fn prop_appels_paralleles() {
    let mut rng = Rng::new(7);
    let exprs: Vec<String> = (0..50).map(|_| gen_expr(&mut rng, 5).0).collect();
    let seq: Vec<_> = exprs.iter().map(|e| evaluate(e)).collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| exprs.iter().map(|e| evaluate(e)).collect::<Vec<_>>()))
            .collect();

        for h in handles {
            let par = h.join().unwrap_or_else(|_| panic!("thread paniqué"));
            assert_eq!(par, seq);
        }
    });
}
