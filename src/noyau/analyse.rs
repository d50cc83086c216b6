// src/noyau/analyse.rs
//
// Descente récursive : jetons -> Expr
// -----------------------------------
// Grammaire (de la plus faible à la plus forte priorité) :
//
//   expr     := terme (('+' | '-') terme)*
//   terme    := unaire (('*' | '/') unaire)*
//   unaire   := ('+' | '-') unaire | puiss
//   puiss    := postfixe ('^' unaire)?          // associatif à droite : 2^3^2 = 2^9
//   postfixe := primaire '!'*
//   primaire := Num | π | e | fonction '(' expr ')' | '(' expr ')'
//
// Conséquences :
// - "-2^2" = -(2^2) = -4 ; "2^-1" = 0.5
// - "-3!" = -(3!)
// - pas de multiplication implicite : "2(3)" est refusé
//
// Garde-fous :
// - chaque passage dans `unaire` compte un niveau ; au-delà de PROFONDEUR_MAX
//   on refuse (pas de débordement de pile sur "((((((...") ;
// - chaque nœud construit connaît sa hauteur ; au-delà de HAUTEUR_MAX on refuse.
//   Les boucles (1+1+…, 2*2*…, 3!!!…) ne récursent pas ici, mais l’arbre qu’elles
//   produisent est parcouru récursivement ensuite (évaluation, Display, drop).

use std::f64::consts::{E, PI};

use super::erreur::ErreurCalc;
use super::expr::{Expr, Fonction, OpBinaire};
use super::jetons::{format_tokens, Tok};

/// Profondeur d’imbrication maximale (parenthèses, signes, puissances en chaîne).
pub const PROFONDEUR_MAX: usize = 256;

/// Hauteur maximale de l’arbre produit (chaînes d’opérateurs, factorielles en série).
pub const HAUTEUR_MAX: usize = 1024;

/// Construit l’arbre d’une suite de jetons complète.
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Num(30), RPar, Plus, Num(1)]
///   expr:   Binaire(Add, Appel(Sin, Lit(30)), Lit(1))
pub fn analyser(jetons: &[Tok]) -> Result<Expr, ErreurCalc> {
    if jetons.is_empty() {
        return Err(ErreurCalc::ExpressionVide);
    }

    let mut a = Analyseur {
        jetons,
        pos: 0,
        profondeur: 0,
    };
    let e = a.expr()?;

    match a.courant() {
        None => Ok(e.expr),
        Some(Tok::RPar) => Err(ErreurCalc::ParentheseInattendue),
        Some(t) => Err(ErreurCalc::JetonInattendu(format_tokens(
            std::slice::from_ref(t),
        ))),
    }
}

/// Sous-arbre en construction, avec sa hauteur.
struct Noeud {
    expr: Expr,
    hauteur: usize,
}

impl Noeud {
    fn feuille(n: f64) -> Noeud {
        Noeud {
            expr: Expr::Lit(n),
            hauteur: 1,
        }
    }

    /// Pose un nœud au-dessus d’enfants de hauteur `sous` ; refuse au-delà de HAUTEUR_MAX.
    fn coiffer(sous: usize, expr: Expr) -> Result<Noeud, ErreurCalc> {
        let hauteur = sous + 1;
        if hauteur > HAUTEUR_MAX {
            return Err(ErreurCalc::TropProfond(HAUTEUR_MAX));
        }
        Ok(Noeud { expr, hauteur })
    }

    fn envelopper(self, f: fn(Expr) -> Expr) -> Result<Noeud, ErreurCalc> {
        Noeud::coiffer(self.hauteur, f(self.expr))
    }

    fn binaire(op: OpBinaire, a: Noeud, b: Noeud) -> Result<Noeud, ErreurCalc> {
        Noeud::coiffer(a.hauteur.max(b.hauteur), Expr::binaire(op, a.expr, b.expr))
    }
}

struct Analyseur<'a> {
    jetons: &'a [Tok],
    pos: usize,
    profondeur: usize,
}

impl<'a> Analyseur<'a> {
    fn courant(&self) -> Option<&'a Tok> {
        self.jetons.get(self.pos)
    }

    fn avancer(&mut self) -> Option<&'a Tok> {
        let t = self.jetons.get(self.pos);
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    /// Consomme le jeton courant s’il est égal à `attendu`.
    fn accepter(&mut self, attendu: &Tok) -> bool {
        if self.courant() == Some(attendu) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn inattendu(t: Option<&Tok>) -> ErreurCalc {
        match t {
            None => ErreurCalc::FinInattendue,
            Some(Tok::RPar) => ErreurCalc::ParentheseInattendue,
            Some(t) => ErreurCalc::JetonInattendu(format_tokens(std::slice::from_ref(t))),
        }
    }

    fn expr(&mut self) -> Result<Noeud, ErreurCalc> {
        let mut gauche = self.terme()?;
        loop {
            let op = match self.courant() {
                Some(Tok::Plus) => OpBinaire::Add,
                Some(Tok::Minus) => OpBinaire::Sub,
                _ => return Ok(gauche),
            };
            self.pos += 1;
            let droite = self.terme()?;
            gauche = Noeud::binaire(op, gauche, droite)?;
        }
    }

    fn terme(&mut self) -> Result<Noeud, ErreurCalc> {
        let mut gauche = self.unaire()?;
        loop {
            let op = match self.courant() {
                Some(Tok::Star) => OpBinaire::Mul,
                Some(Tok::Slash) => OpBinaire::Div,
                _ => return Ok(gauche),
            };
            self.pos += 1;
            let droite = self.unaire()?;
            gauche = Noeud::binaire(op, gauche, droite)?;
        }
    }

    fn unaire(&mut self) -> Result<Noeud, ErreurCalc> {
        self.profondeur += 1;
        if self.profondeur > PROFONDEUR_MAX {
            return Err(ErreurCalc::TropProfond(PROFONDEUR_MAX));
        }

        let out = if self.accepter(&Tok::Minus) {
            self.unaire().and_then(|x| x.envelopper(Expr::neg))
        } else if self.accepter(&Tok::Plus) {
            self.unaire()
        } else {
            self.puissance()
        };

        self.profondeur -= 1;
        out
    }

    fn puissance(&mut self) -> Result<Noeud, ErreurCalc> {
        let base = self.postfixe()?;
        if self.accepter(&Tok::Caret) {
            // l’exposant peut porter un signe : 2^-1
            let exposant = self.unaire()?;
            return Noeud::binaire(OpBinaire::Pow, base, exposant);
        }
        Ok(base)
    }

    fn postfixe(&mut self) -> Result<Noeud, ErreurCalc> {
        let mut e = self.primaire()?;
        while self.accepter(&Tok::Bang) {
            e = e.envelopper(Expr::factorielle)?;
        }
        Ok(e)
    }

    fn primaire(&mut self) -> Result<Noeud, ErreurCalc> {
        match self.avancer() {
            Some(Tok::Num(n)) => Ok(Noeud::feuille(*n)),
            Some(Tok::Pi) => Ok(Noeud::feuille(PI)),
            Some(Tok::E) => Ok(Noeud::feuille(E)),

            Some(Tok::Ident(nom)) => {
                let f = Fonction::depuis_nom(nom)
                    .ok_or_else(|| ErreurCalc::IdentifiantInconnu(nom.clone()))?;
                // une fonction exige sa parenthèse : "sin 30" est refusé
                if !self.accepter(&Tok::LPar) {
                    return Err(Self::inattendu(self.courant()));
                }
                let arg = self.entre_parentheses()?;
                Noeud::coiffer(arg.hauteur, Expr::appel(f, arg.expr))
            }

            Some(Tok::LPar) => self.entre_parentheses(),

            t => Err(Self::inattendu(t)),
        }
    }

    /// Suite d’une '(' déjà consommée : expr puis ')'.
    fn entre_parentheses(&mut self) -> Result<Noeud, ErreurCalc> {
        let e = self.expr()?;
        match self.avancer() {
            Some(Tok::RPar) => Ok(e),
            None => Err(ErreurCalc::ParentheseNonFermee),
            t => Err(Self::inattendu(t)),
        }
    }
}
