// src/noyau/jetons.rs

use super::erreur::ErreurCalc;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    /// Littéral numérique, texte brut (parsé seulement à l'évaluation).
    Num(String),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux non signés (ex: 12, 3.5, .5, 5.)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - moins/plus unaire EN TÊTE seulement: "-5+2" devient "0-5+2"
///   (chaque opérateur reste ainsi binaire)
///
/// Tout autre caractère est ignoré en silence (les espaces servent de
/// séparateurs neutres). Zéro jeton au final => ExpressionInvalide.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    // Normalisation du signe de tête: préfixe un 0 implicite.
    let normalise: String = match s.chars().next() {
        Some('+') | Some('-') => format!("0{s}"),
        _ => s.to_string(),
    };

    let mut out = Vec::new();
    let chars: Vec<char> = normalise.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre commençant par un chiffre: chiffres, point optionnel,
        // puis chiffres optionnels ("5", "3.5", "5." accepté => 5)
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        // Nombre commençant par un point: ".5" => 0.5
        // Un point isolé (pas de chiffre derrière) ne forme PAS de jeton.
        if c == '.' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit() {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        // Caractère hors alphabet: ignoré en silence (contrat permissif,
        // voir DESIGN.md). Trace debug pour qui veut l'observer.
        if !c.is_whitespace() {
            log::debug!("tokenize: caractère ignoré: {c:?}");
        }
        i += 1;
    }

    if out.is_empty() {
        return Err(ErreurCalc::ExpressionInvalide);
    }
    Ok(out)
}

/// Format utilitaire (logs) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(texte) => texte.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
