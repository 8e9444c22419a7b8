//! src/app/etat.rs
//!
//! État UI (sans vue, sans évaluation).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, équation précédente, erreur, démarche)
//! et offrir les actions d’édition des touches (chiffres, opérateurs, ±, DEL, C).
//!
//! Contrats :
//! - Aucune évaluation ici (pas de tokenizer, pas de paliers).
//! - L’entrée n’est jamais vide : "0" au repos.
//! - Les opérateurs sont insérés avec leurs espaces : " + ", " × "…

use calculatrice_basique::noyau::CalcError;

/// Opérateurs tels qu’affichés dans l’entrée (glyphes + ASCII tapés au clavier).
const OPERATEURS_AFFICHES: &str = "+-×÷%*/";

pub const MSG_DIVISION_ZERO: &str = "Erreur : division par zéro";
pub const MSG_ERREUR: &str = "Erreur";

fn is_operateur_affiche(c: char) -> bool {
    OPERATEURS_AFFICHES.contains(c)
}

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub palier_haut: String,
    pub palier_bas: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub precedente: String,     // équation évaluée au dernier "="
    pub erreur: String,         // message court (vide si pas d’erreur)
    pub erreur_detail: String,  // cause technique (CalcError)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: "0".to_string(),
            precedente: String::new(),
            erreur: String::new(),
            erreur_detail: String::new(),
            demarche: Demarche::default(),
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// C : tout remettre à zéro.
    pub fn clear_entree(&mut self) {
        self.entree = "0".to_string();
        self.precedente.clear();
        self.clear_erreur();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Chiffre ou '.'.
    pub fn ajouter_chiffre(&mut self, c: char) {
        if self.entree == "0" {
            self.entree = if c == '.' { "0.".to_string() } else { c.to_string() };
        } else if c != '.' || !self.nombre_courant().contains('.') {
            // un seul point par nombre
            self.entree.push(c);
        }
        self.focus_entree = true;
    }

    /// Opérateur affiché (+ - × ÷ %), refusé en tête ou juste après un autre opérateur.
    pub fn ajouter_operation(&mut self, op: char) {
        let dernier = self.entree.trim_end().chars().last();
        if let Some(c) = dernier {
            if !is_operateur_affiche(c) {
                self.entree.truncate(self.entree.trim_end().len());
                self.entree.push_str(&format!(" {op} "));
            }
        }
        self.focus_entree = true;
    }

    /// ± : inverse le signe du dernier nombre de l’entrée.
    ///
    /// Un '-' collé au nombre est un signe s’il est en tête ou précédé d’un opérateur;
    /// sinon c’est une soustraction et on ajoute un signe après elle.
    pub fn basculer_signe(&mut self) {
        let corps = self.entree.trim_end();
        if corps.is_empty() || corps == "0" {
            return;
        }

        let fin = corps.len();
        let debut = corps
            .char_indices()
            .rev()
            .find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
            .map_or(0, |(i, c)| i + c.len_utf8());

        // entrée terminée par un opérateur : rien à inverser
        if debut == fin {
            return;
        }

        let (avant, nombre) = corps.split_at(debut);

        if let Some(sans_signe) = avant.strip_suffix('-') {
            let precedent = sans_signe.trim_end().chars().last();
            if precedent.is_none_or(is_operateur_affiche) {
                self.entree = format!("{sans_signe}{nombre}");
                self.focus_entree = true;
                return;
            }
        }

        self.entree = format!("{avant}-{nombre}");
        self.focus_entree = true;
    }

    /// DEL : retire le dernier symbole (un opérateur " + " part d’un coup).
    pub fn supprimer(&mut self) {
        self.entree.truncate(self.entree.trim_end().len());
        self.entree.pop();
        self.entree.truncate(self.entree.trim_end().len());

        if self.entree.is_empty() {
            self.entree = "0".to_string();
        }
        self.focus_entree = true;
    }

    /// Nombre en cours de saisie (après le dernier opérateur ou espace).
    fn nombre_courant(&self) -> &str {
        let debut = self
            .entree
            .char_indices()
            .rev()
            .find(|(_, c)| is_operateur_affiche(*c) || c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        &self.entree[debut..]
    }

    /* ------------------------ Sorties ------------------------ */

    fn clear_erreur(&mut self) {
        self.erreur.clear();
        self.erreur_detail.clear();
    }

    /// Dépose un résultat formaté : il devient la nouvelle entrée.
    pub fn set_resultat(&mut self, expression: String, resultat: String, demarche: Demarche) {
        self.clear_erreur();
        self.precedente = expression;
        self.entree = resultat;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Place une erreur. L’entrée est conservée pour correction.
    pub fn set_erreur(&mut self, expression: String, err: &CalcError) {
        self.precedente = expression;
        self.erreur = if err.is_division_par_zero() {
            MSG_DIVISION_ZERO.to_string()
        } else {
            MSG_ERREUR.to_string()
        };
        self.erreur_detail = err.to_string();

        // démarche non fiable si l’évaluation échoue
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }
}
