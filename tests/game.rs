//! Game integration tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use deckjack::{
    ActionError, Card, CardFace, DealError, DeckHandle, DeckProvider, GameOptions, GameState,
    ProviderError, Rank, StartError, Suit, Table, Winner,
};

/// Deals a fixed sequence of draws, optionally failing some of them.
#[derive(Default)]
struct ScriptedDeck {
    script: Mutex<VecDeque<Result<Card, ProviderError>>>,
    draws: AtomicUsize,
    reshuffles: AtomicUsize,
    unavailable: bool,
    fail_reshuffle: bool,
    yield_on_draw: bool,
}

impl ScriptedDeck {
    fn new(script: Vec<Result<Card, ProviderError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            ..Self::default()
        }
    }

    fn push(&self, draw: Result<Card, ProviderError>) {
        self.script.lock().unwrap().push_back(draw);
    }

    fn draws(&self) -> usize {
        self.draws.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeckProvider for ScriptedDeck {
    async fn create_shuffled_deck(&self, deck_count: u8) -> Result<DeckHandle, ProviderError> {
        if self.unavailable {
            return Err(ProviderError::Transport("connection refused".into()));
        }
        Ok(DeckHandle::new(format!("scripted-{deck_count}")))
    }

    async fn reshuffle(&self, _deck: &DeckHandle) -> Result<(), ProviderError> {
        self.reshuffles.fetch_add(1, Ordering::SeqCst);
        if self.fail_reshuffle {
            return Err(ProviderError::Rejected("deck is busy".into()));
        }
        Ok(())
    }

    async fn draw(&self, _deck: &DeckHandle, count: usize) -> Result<Vec<Card>, ProviderError> {
        assert_eq!(count, 1, "cards are drawn one at a time");
        if self.yield_on_draw {
            tokio::task::yield_now().await;
        }
        self.draws.fetch_add(1, Ordering::SeqCst);

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Ok(card)) => Ok(vec![card]),
            Some(Err(err)) => Err(err),
            None => Err(ProviderError::Rejected("script exhausted".into())),
        }
    }
}

const fn card(rank: Rank) -> Card {
    Card::new(rank, Suit::Spades)
}

fn deal(ranks: &[Rank]) -> Vec<Result<Card, ProviderError>> {
    ranks.iter().map(|&rank| Ok(card(rank))).collect()
}

fn rejected() -> ProviderError {
    ProviderError::Rejected("not enough cards".into())
}

async fn table_with(provider: ScriptedDeck) -> Table<ScriptedDeck> {
    Table::connect(provider, GameOptions::default())
        .await
        .unwrap()
}

async fn dealt_table(ranks: &[Rank]) -> Table<ScriptedDeck> {
    let table = table_with(ScriptedDeck::new(deal(ranks))).await;
    table.new_game().await.unwrap();
    table
}

#[tokio::test]
async fn connect_failure_reports_provider_unavailable() {
    let provider = ScriptedDeck {
        unavailable: true,
        ..ScriptedDeck::default()
    };

    let err = Table::connect(provider, GameOptions::default())
        .await
        .err()
        .unwrap();
    assert!(matches!(err, StartError::ProviderUnavailable(ProviderError::Transport(_))));
}

#[tokio::test]
async fn connect_creates_deck_with_configured_count() {
    let table = Table::connect(
        ScriptedDeck::default(),
        GameOptions::default().with_deck_count(6),
    )
    .await
    .unwrap();

    assert_eq!(table.deck().id(), "scripted-6");
    assert_eq!(table.state(), GameState::AwaitingDeal);
    assert!(table.player_hand().is_empty());
}

#[tokio::test]
async fn new_game_deals_alternately() {
    let table = dealt_table(&[
        Rank::Two,   // player
        Rank::Three, // dealer up
        Rank::Four,  // player
        Rank::Five,  // dealer hole
    ])
    .await;

    assert_eq!(table.state(), GameState::PlayerTurn);
    assert_eq!(table.provider().reshuffles.load(Ordering::SeqCst), 1);

    let round = table.round();
    let player: Vec<Rank> = round.player_hand().cards().iter().map(|c| c.rank).collect();
    let dealer: Vec<Rank> = round.dealer_hand().cards().iter().map(|c| c.rank).collect();
    assert_eq!(player, [Rank::Two, Rank::Four]);
    assert_eq!(dealer, [Rank::Three, Rank::Five]);
    assert!(!round.player_turn_ended());
    assert!(!round.is_game_over());
}

#[tokio::test]
async fn reshuffle_can_be_disabled() {
    let table = Table::connect(
        ScriptedDeck::new(deal(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five])),
        GameOptions::default().with_reshuffle_each_round(false),
    )
    .await
    .unwrap();

    table.new_game().await.unwrap();
    assert_eq!(table.provider().reshuffles.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failed_reshuffle_does_not_stop_the_deal() {
    let provider = ScriptedDeck {
        fail_reshuffle: true,
        ..ScriptedDeck::new(deal(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five]))
    };
    let table = table_with(provider).await;

    table.new_game().await.unwrap();
    assert_eq!(table.state(), GameState::PlayerTurn);
}

#[tokio::test]
async fn dealer_stands_at_seventeen_below_player() {
    let table = dealt_table(&[
        Rank::Ten,   // player
        Rank::Ten,   // dealer up
        Rank::Nine,  // player
        Rank::Seven, // dealer hole
    ])
    .await;

    let result = table.stay().await.unwrap();
    assert_eq!(result.winner, Winner::Player);
    assert_eq!(result.player_value, 19);
    assert_eq!(result.dealer_value, 17);
    assert!(!result.dealer_bust);
    assert_eq!(table.state(), GameState::Resolved);
    assert_eq!(table.provider().draws(), 4);
}

#[tokio::test]
async fn player_bust_ends_round_without_dealer_draws() {
    let table = dealt_table(&[
        Rank::Ten,  // player
        Rank::Ten,  // dealer up
        Rank::King, // player
        Rank::Six,  // dealer hole
    ])
    .await;
    table.provider().push(Ok(card(Rank::King)));
    table.provider().push(Ok(card(Rank::Five)));

    let hit = table.hit().await.unwrap();
    assert_eq!(hit.rank, Rank::King);

    assert_eq!(table.state(), GameState::Resolved);
    assert!(table.is_round_over());
    assert!(table.did_dealer_win());
    assert_eq!(table.player_value(), 30);
    assert_eq!(table.round().dealer_hand().len(), 2);
    assert_eq!(table.provider().draws(), 5);

    let result = table.result().unwrap();
    assert!(result.player_bust);
    assert_eq!(result.dealer_value, 16);
}

#[tokio::test]
async fn dealer_draws_to_catch_player() {
    let table = dealt_table(&[
        Rank::Ten,  // player
        Rank::Ten,  // dealer up
        Rank::King, // player
        Rank::Six,  // dealer hole
        Rank::Five, // dealer draw
    ])
    .await;

    let result = table.stay().await.unwrap();
    assert_eq!(result.winner, Winner::Dealer);
    assert_eq!(result.player_value, 20);
    assert_eq!(result.dealer_value, 21);
    assert_eq!(table.round().dealer_hand().len(), 3);
}

#[tokio::test]
async fn tie_goes_to_dealer() {
    let table = dealt_table(&[Rank::Ten, Rank::Ten, Rank::Eight, Rank::Eight]).await;

    let result = table.stay().await.unwrap();
    assert_eq!(result.winner, Winner::Dealer);
    assert_eq!(result.player_value, 18);
    assert_eq!(result.dealer_value, 18);
}

#[tokio::test]
async fn dealer_bust_pays_player() {
    let table = dealt_table(&[
        Rank::Ten,   // player
        Rank::Ten,   // dealer up
        Rank::Eight, // player
        Rank::Six,   // dealer hole
        Rank::Queen, // dealer draw
    ])
    .await;

    let result = table.stay().await.unwrap();
    assert_eq!(result.winner, Winner::Player);
    assert!(result.dealer_bust);
    assert_eq!(result.dealer_value, 26);
    assert_eq!(Winner::Player.to_string(), "Player Wins!");
}

#[tokio::test]
async fn dealer_hole_card_hidden_until_turn_ends() {
    let table = dealt_table(&[Rank::Ten, Rank::Nine, Rank::Nine, Rank::King]).await;

    let faces = table.dealer_hand_for_display(false);
    assert_eq!(faces.len(), 2);
    assert_eq!(faces[0], CardFace::Up(card(Rank::Nine)));
    assert_eq!(faces[1], CardFace::Down);
    assert_eq!(
        faces[1].image(&table.options().card_back_image),
        Some(deckjack::options::DEFAULT_CARD_BACK)
    );
    assert_eq!(table.dealer_visible_value(), 9);
    assert_eq!(table.dealer_value(), 19);

    let revealed = table.dealer_hand_for_display(true);
    assert_eq!(revealed[1], CardFace::Up(card(Rank::King)));

    table.stay().await.unwrap();
    assert!(
        table
            .dealer_hand_for_display(false)
            .iter()
            .all(|face| face.card().is_some())
    );
    assert_eq!(table.dealer_visible_value(), 19);
}

#[tokio::test]
async fn hole_card_uses_configured_card_back() {
    let options = GameOptions::default().with_card_back_image("back.png");
    let provider = ScriptedDeck::new(deal(&[Rank::Ten, Rank::Nine, Rank::Nine, Rank::King]));
    let table = Table::connect(provider, options).await.unwrap();
    table.new_game().await.unwrap();

    let back = &table.options().card_back_image;
    let faces = table.dealer_hand_for_display(false);
    assert_eq!(faces[1], CardFace::Down);
    assert_eq!(faces[1].image(back), Some("back.png"));
    assert_eq!(CardFace::Down.image(back), Some("back.png"));
}

#[tokio::test]
async fn soft_hand_survives_a_hit() {
    let table = dealt_table(&[Rank::Ace, Rank::Ten, Rank::Six, Rank::Seven]).await;
    table.provider().push(Ok(card(Rank::Ace)));

    table.hit().await.unwrap();
    assert_eq!(table.player_value(), 18);
    assert!(table.player_hand().is_soft());
    assert_eq!(table.state(), GameState::PlayerTurn);
    assert_eq!(table.winner(), None);
}

#[tokio::test]
async fn actions_rejected_outside_player_turn() {
    let table = table_with(ScriptedDeck::default()).await;
    assert_eq!(table.hit().await.unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.stay().await.unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.dealer_play().await.unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.provider().draws(), 0);

    let table = dealt_table(&[Rank::Ten, Rank::Ten, Rank::Nine, Rank::Seven]).await;
    table.stay().await.unwrap();
    assert_eq!(table.hit().await.unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.stay().await.unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.provider().draws(), 4);
}

#[tokio::test]
async fn failed_hit_leaves_hand_untouched() {
    let table = dealt_table(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five]).await;
    table.provider().push(Err(rejected()));

    assert_eq!(
        table.hit().await.unwrap_err(),
        ActionError::DrawFailed(rejected())
    );
    assert_eq!(table.player_hand().len(), 2);
    assert_eq!(table.state(), GameState::PlayerTurn);
}

#[tokio::test]
async fn empty_draw_is_a_failed_draw() {
    struct EmptyDeck;

    #[async_trait]
    impl DeckProvider for EmptyDeck {
        async fn create_shuffled_deck(&self, _: u8) -> Result<DeckHandle, ProviderError> {
            Ok(DeckHandle::new("empty"))
        }

        async fn reshuffle(&self, _: &DeckHandle) -> Result<(), ProviderError> {
            Ok(())
        }

        async fn draw(&self, _: &DeckHandle, _: usize) -> Result<Vec<Card>, ProviderError> {
            Ok(Vec::new())
        }
    }

    let table = Table::connect(EmptyDeck, GameOptions::default())
        .await
        .unwrap();
    assert_eq!(
        table.new_game().await.unwrap_err(),
        DealError::DrawFailed(ProviderError::Empty)
    );
}

#[tokio::test]
async fn failed_deal_keeps_partial_hands_and_awaits_new_game() {
    let mut script = deal(&[Rank::Two, Rank::Three]);
    script.push(Err(rejected()));
    let table = table_with(ScriptedDeck::new(script)).await;

    assert_eq!(
        table.new_game().await.unwrap_err(),
        DealError::DrawFailed(rejected())
    );
    assert_eq!(table.state(), GameState::AwaitingDeal);
    assert_eq!(table.player_hand().len(), 1);
    assert_eq!(table.round().dealer_hand().len(), 1);
    assert_eq!(table.hit().await.unwrap_err(), ActionError::InvalidState);

    for draw in deal(&[Rank::Four, Rank::Five, Rank::Six, Rank::Seven]) {
        table.provider().push(draw);
    }
    table.new_game().await.unwrap();
    assert_eq!(table.player_hand().len(), 2);
    assert_eq!(table.round().dealer_hand().len(), 2);
    assert_eq!(table.state(), GameState::PlayerTurn);
}

#[tokio::test]
async fn failed_dealer_draw_can_be_resumed() {
    let table = dealt_table(&[Rank::Ten, Rank::Ten, Rank::King, Rank::Two]).await;
    table.provider().push(Err(rejected()));

    assert_eq!(
        table.stay().await.unwrap_err(),
        ActionError::DrawFailed(rejected())
    );
    assert_eq!(table.state(), GameState::DealerTurn);
    assert!(table.round().player_turn_ended());
    assert!(!table.is_round_over());
    assert_eq!(table.round().dealer_hand().len(), 2);

    table.provider().push(Ok(card(Rank::Nine)));
    let result = table.dealer_play().await.unwrap();
    assert_eq!(result.winner, Winner::Dealer);
    assert_eq!(result.dealer_value, 21);

    // Resolved rounds report the same result again.
    assert_eq!(table.dealer_play().await.unwrap(), result);
}

#[tokio::test]
async fn concurrent_intents_are_rejected() {
    let provider = ScriptedDeck {
        yield_on_draw: true,
        ..ScriptedDeck::new(deal(&[
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
        ]))
    };
    let table = table_with(provider).await;
    table.new_game().await.unwrap();

    let (first, second) = tokio::join!(table.hit(), table.hit());
    let busy = [&first, &second]
        .iter()
        .filter(|r| matches!(r, Err(ActionError::Busy)))
        .count();
    assert_eq!(busy, 1);
    assert!(first.is_ok() || second.is_ok());
    assert_eq!(table.player_hand().len(), 3);
    assert_eq!(table.provider().draws(), 5);
    assert!(!table.is_busy());
}

#[tokio::test]
async fn new_game_resets_a_finished_round() {
    let table = dealt_table(&[
        Rank::Ten,
        Rank::Ten,
        Rank::King,
        Rank::Six,
        Rank::King, // player bust
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
    ])
    .await;

    table.hit().await.unwrap();
    assert!(table.is_round_over());

    table.new_game().await.unwrap();
    let round = table.round();
    assert_eq!(round.state(), GameState::PlayerTurn);
    assert_eq!(round.player_hand().len(), 2);
    assert_eq!(round.dealer_hand().len(), 2);
    assert!(!round.player_turn_ended());
    assert!(!round.is_game_over());
    assert_eq!(round.winner(), None);
    assert!(!table.did_dealer_win());
    assert_eq!(table.result(), None);
}
