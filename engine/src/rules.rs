use crate::errors::GameError;
use crate::player::Action;

/// An action after validation against the betting state, with the chips it
/// moves fully resolved. `to` amounts are round totals, `pay` is what leaves
/// the player's stack now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call { pay: u32 },
    Bet { to: u32, pay: u32 },
    /// `full` is false for an all-in below the minimum raise, which does not
    /// reopen the betting.
    Raise { to: u32, pay: u32, full: bool },
}

/// Validate a player action against betting rules and stack size.
///
/// * `stack` - chips the player still holds
/// * `committed` - chips the player has already committed this round
/// * `current_bet` - the round total every live player must match
/// * `min_raise_to` - the smallest legal full raise total
/// * `min_bet` - the smallest legal opening bet (the big blind)
///
/// Bets and raises below their minimum are legal only when they put the
/// player all-in; anything else is rejected.
///
/// # Examples
///
/// ```
/// use chip_engine::rules::{validate_action, ValidatedAction};
/// use chip_engine::player::Action;
///
/// // Calling a 50-chip bet with nothing yet committed
/// let v = validate_action(1000, 0, 50, 100, 50, Action::Call);
/// assert_eq!(v, Ok(ValidatedAction::Call { pay: 50 }));
///
/// // A short stack calls for less
/// let v = validate_action(30, 0, 50, 100, 50, Action::Call);
/// assert_eq!(v, Ok(ValidatedAction::Call { pay: 30 }));
///
/// // Raising to 150 over a 50-chip bet
/// let v = validate_action(1000, 50, 50, 100, 50, Action::Raise(150));
/// assert_eq!(v, Ok(ValidatedAction::Raise { to: 150, pay: 100, full: true }));
/// ```
pub fn validate_action(
    stack: u32,
    committed: u32,
    current_bet: u32,
    min_raise_to: u32,
    min_bet: u32,
    action: Action,
) -> Result<ValidatedAction, GameError> {
    let all_in_to = stack + committed;
    match action {
        Action::Fold => Ok(ValidatedAction::Fold),
        Action::Check => {
            if current_bet > committed {
                Err(GameError::CannotCheck)
            } else {
                Ok(ValidatedAction::Check)
            }
        }
        Action::Call => {
            if current_bet <= committed {
                return Err(GameError::NothingToCall);
            }
            let pay = (current_bet - committed).min(stack);
            Ok(ValidatedAction::Call { pay })
        }
        Action::Bet(to) => {
            if current_bet > 0 {
                return Err(GameError::CannotBet);
            }
            if to >= all_in_to {
                return Ok(ValidatedAction::Bet {
                    to: all_in_to,
                    pay: stack,
                });
            }
            if to < min_bet {
                return Err(GameError::InvalidBetAmount {
                    amount: to,
                    minimum: min_bet,
                });
            }
            Ok(ValidatedAction::Bet { to, pay: to - committed })
        }
        Action::Raise(to) => {
            if current_bet == 0 {
                return Err(GameError::CannotBet);
            }
            if to >= all_in_to {
                return Ok(ValidatedAction::Raise {
                    to: all_in_to,
                    pay: stack,
                    full: all_in_to >= min_raise_to,
                });
            }
            if to < min_raise_to {
                return Err(GameError::InvalidRaiseAmount {
                    amount: to,
                    minimum: min_raise_to,
                });
            }
            Ok(ValidatedAction::Raise {
                to,
                pay: to - committed,
                full: true,
            })
        }
    }
}
