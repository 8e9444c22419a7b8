//! Affichage du résultat (côté appelant).
//!
//! - valeur entière => rendu entier ("14", pas "14.0")
//! - sinon          => rendu décimal le plus court, sans zéros ni point final

/// Au-delà, `as i64` perdrait la garantie “entier exact”; on passe par le rendu f64.
const ENTIER_MAX: f64 = 1e15;

pub fn format_nombre(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < ENTIER_MAX {
        // -0.0 tombe ici aussi => "0"
        return format!("{}", v as i64);
    }

    let s = v.to_string();
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entiers() {
        assert_eq!(format_nombre(14.0), "14");
        assert_eq!(format_nombre(-15.0), "-15");
        assert_eq!(format_nombre(0.0), "0");
        assert_eq!(format_nombre(-0.0), "0");
    }

    #[test]
    fn decimaux() {
        assert_eq!(format_nombre(2.5), "2.5");
        assert_eq!(format_nombre(-0.125), "-0.125");
        assert_eq!(format_nombre(0.1 + 0.2), "0.30000000000000004");
        assert!(format_nombre(1.0 / 3.0).starts_with("0.333"));
    }

    #[test]
    fn grands_entiers_sans_exposant() {
        assert_eq!(format_nombre(1e20), "100000000000000000000");
    }
}
