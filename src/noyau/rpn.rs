// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> réduction numérique
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis réduire la RPN en un seul f64 via une pile
//
// Règles:
// - Quatre opérateurs binaires seulement, tous associatifs à gauche
//   (pas d'exposant, donc aucun cas associatif à droite)
// - Le moins unaire n'existe pas ici: jetons.rs a déjà injecté le 0 de tête

use super::erreur::ErreurCalc;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        _ => 0,
    }
}

fn is_operateur(t: &Tok) -> bool {
    matches!(t, Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                // dépile tant que le sommet est un opérateur de précédence
                // supérieure OU ÉGALE (égalité => associativité gauche)
                while let Some(top) = ops.last() {
                    if !is_operateur(top) {
                        break;
                    }
                    if precedence(top) >= precedence(&tok) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu'à '(' (la parenthèse elle-même est jetée)
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => out.push(op),
                        None => return Err(ErreurCalc::ParenthesesDesequilibrees),
                    }
                }
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalc::ParenthesesDesequilibrees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Réduit une RPN en une seule valeur.
///
/// Protocole: un Num empile sa valeur; un opérateur dépile b (sommet) puis a
/// et empile `a OP b`. À la fin, la pile doit contenir EXACTEMENT une valeur.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalc> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(texte) => {
                let v: f64 = texte
                    .parse()
                    .map_err(|_| ErreurCalc::ExpressionMalFormee)?;
                st.push(v);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurCalc::ExpressionMalFormee)?;
                let a = st.pop().ok_or(ErreurCalc::ExpressionMalFormee)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => {
                        if b == 0.0 {
                            return Err(ErreurCalc::DivisionParZero);
                        }
                        a / b
                    }
                    _ => unreachable!(),
                };

                st.push(v);
            }

            // Une parenthèse ne devrait jamais survivre à to_rpn.
            Tok::LPar => return Err(ErreurCalc::OperateurInconnu('(')),
            Tok::RPar => return Err(ErreurCalc::OperateurInconnu(')')),
        }
    }

    if st.len() != 1 {
        return Err(ErreurCalc::ExpressionMalFormee);
    }
    Ok(st.pop().unwrap())
}
