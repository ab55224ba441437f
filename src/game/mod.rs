//! Game logic: players, word assignment, reveal gesture

pub mod reveal;
pub mod validation;
pub mod words;

use rand::Rng;
use uuid::Uuid;

use validation::{SetupError, MIN_PLAYERS};
use words::WordList;

/// Marker word handed to the impostor
pub const IMPOSTOR_WORD: &str = "IMPOSTOR";

/// A player in the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Opaque unique id
    pub id: Uuid,
    /// Display name (trimmed, unique ignoring case)
    pub name: String,
}

impl Player {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }
}

/// The word a player gets for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub player: Player,
    pub word: String,
    pub is_impostor: bool,
}

/// Deal a round: one common word for everybody, one impostor.
///
/// Both the word and the impostor are single uniform draws. Assignments
/// come back in player order.
pub fn deal_round<R: Rng>(
    players: &[Player],
    words: &WordList,
    impostor_word: &str,
    rng: &mut R,
) -> Result<Vec<Assignment>, SetupError> {
    if players.len() < MIN_PLAYERS {
        return Err(SetupError::NotEnoughPlayers { min: MIN_PLAYERS });
    }

    let common_word = words.pick(rng).ok_or(SetupError::EmptyWordList)?;
    let impostor_index = rng.random_range(0..players.len());

    let assignments = players
        .iter()
        .enumerate()
        .map(|(index, player)| {
            let is_impostor = index == impostor_index;
            Assignment {
                player: player.clone(),
                word: if is_impostor {
                    impostor_word.to_string()
                } else {
                    common_word.to_string()
                },
                is_impostor,
            }
        })
        .collect();

    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn players(names: &[&str]) -> Vec<Player> {
        names.iter().map(|n| Player::new(n.to_string())).collect()
    }

    fn words() -> WordList {
        WordList::from_words(["Beach", "Museum", "Library", "Airport"])
    }

    #[test]
    fn test_player_ids_are_unique() {
        let list = players(&["Ana", "Bea", "Carla", "Dani"]);
        let ids: HashSet<_> = list.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn test_exactly_one_impostor() {
        let list = players(&["Ana", "Bea", "Carla", "Dani", "Eva"]);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let round = deal_round(&list, &words(), IMPOSTOR_WORD, &mut rng).unwrap();
            assert_eq!(round.len(), list.len());
            assert_eq!(round.iter().filter(|a| a.is_impostor).count(), 1);
        }
    }

    #[test]
    fn test_non_impostors_share_word() {
        let list = players(&["Ana", "Bea", "Carla", "Dani"]);
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let round = deal_round(&list, &words(), IMPOSTOR_WORD, &mut rng).unwrap();
            let common: HashSet<_> = round
                .iter()
                .filter(|a| !a.is_impostor)
                .map(|a| a.word.as_str())
                .collect();
            assert_eq!(common.len(), 1);
            let word = common.into_iter().next().unwrap();
            assert!(words().contains(word));
        }
    }

    #[test]
    fn test_impostor_gets_marker_word() {
        let list = players(&["Ana", "Bea", "Carla"]);
        let mut rng = StdRng::seed_from_u64(3);
        let round = deal_round(&list, &words(), "SPY", &mut rng).unwrap();
        let impostor = round.iter().find(|a| a.is_impostor).unwrap();
        assert_eq!(impostor.word, "SPY");
    }

    #[test]
    fn test_assignments_follow_player_order() {
        let list = players(&["Ana", "Bea", "Carla"]);
        let mut rng = StdRng::seed_from_u64(4);
        let round = deal_round(&list, &words(), IMPOSTOR_WORD, &mut rng).unwrap();
        let order: Vec<_> = round.iter().map(|a| a.player.clone()).collect();
        assert_eq!(order, list);
    }

    #[test]
    fn test_every_player_can_be_impostor() {
        let list = players(&["Ana", "Bea", "Carla"]);
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = HashSet::new();
        for _ in 0..300 {
            let round = deal_round(&list, &words(), IMPOSTOR_WORD, &mut rng).unwrap();
            let impostor = round.iter().position(|a| a.is_impostor).unwrap();
            seen.insert(impostor);
        }
        assert_eq!(seen.len(), list.len());
    }

    #[test]
    fn test_not_enough_players() {
        let list = players(&["Ana", "Bea"]);
        let mut rng = StdRng::seed_from_u64(6);
        assert_eq!(
            deal_round(&list, &words(), IMPOSTOR_WORD, &mut rng),
            Err(SetupError::NotEnoughPlayers { min: 3 })
        );
    }

    #[test]
    fn test_empty_word_list() {
        let list = players(&["Ana", "Bea", "Carla"]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            deal_round(&list, &WordList::default(), IMPOSTOR_WORD, &mut rng),
            Err(SetupError::EmptyWordList)
        );
    }

    #[test]
    fn test_seeded_deal_is_deterministic() {
        let list = players(&["Ana", "Bea", "Carla", "Dani"]);
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        let round1 = deal_round(&list, &words(), IMPOSTOR_WORD, &mut rng1).unwrap();
        let round2 = deal_round(&list, &words(), IMPOSTOR_WORD, &mut rng2).unwrap();

        assert_eq!(round1, round2);
    }
}
