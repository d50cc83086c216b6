// src/noyau/expr.rs
//
// AST numérique (f64).
// - Lit     : littéral (les constantes π et e sont déjà des littéraux)
// - Unaire  : moins unaire, factorielle postfixe
// - Binaire : + - * / ^
// - Appel   : fonction scientifique à un argument (argument quelconque, appels imbriqués permis)

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Log,
    Ln,
}

impl Fonction {
    pub const TOUTES: [Fonction; 9] = [
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Asin,
        Fonction::Acos,
        Fonction::Atan,
        Fonction::Sqrt,
        Fonction::Log,
        Fonction::Ln,
    ];

    /// Nom tel qu’écrit dans l’expression (sans la parenthèse).
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
            Fonction::Sqrt => "sqrt",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
        }
    }

    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        Self::TOUTES.into_iter().find(|f| f.nom() == nom)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpUnaire {
    Neg,
    Factorielle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl OpBinaire {
    fn symbole(self) -> &'static str {
        match self {
            OpBinaire::Add => "+",
            OpBinaire::Sub => "-",
            OpBinaire::Mul => "*",
            OpBinaire::Div => "/",
            OpBinaire::Pow => "^",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Lit(f64),
    Unaire(OpUnaire, Box<Expr>),
    Binaire(OpBinaire, Box<Expr>, Box<Expr>),
    Appel(Fonction, Box<Expr>),
}

impl Expr {
    pub fn neg(x: Expr) -> Expr {
        Expr::Unaire(OpUnaire::Neg, Box::new(x))
    }

    pub fn factorielle(x: Expr) -> Expr {
        Expr::Unaire(OpUnaire::Factorielle, Box::new(x))
    }

    pub fn binaire(op: OpBinaire, a: Expr, b: Expr) -> Expr {
        Expr::Binaire(op, Box::new(a), Box::new(b))
    }

    pub fn appel(f: Fonction, x: Expr) -> Expr {
        Expr::Appel(f, Box::new(x))
    }
}

/// Rendu entièrement parenthésé (sert aux journaux : la structure se lit sans ambiguïté).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Lit(n) => write!(f, "{n}"),
            Expr::Unaire(OpUnaire::Neg, x) => write!(f, "(-{x})"),
            Expr::Unaire(OpUnaire::Factorielle, x) => write!(f, "({x}!)"),
            Expr::Binaire(op, a, b) => write!(f, "({a} {} {b})", op.symbole()),
            Expr::Appel(fun, x) => write!(f, "{}({x})", fun.nom()),
        }
    }
}
