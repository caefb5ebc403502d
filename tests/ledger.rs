//! Bankroll, settlement, and option validation tests.

use bjround::{
    ConfigError, Dollars, EngineError, GameOptions, Ledger, Outcome, PayoutRatio, Payouts,
    RoundingMode, ValidationError,
};

fn ledger(balance: u64) -> Ledger {
    Ledger::new(balance, 1, None)
}

#[test]
fn bet_is_debited_on_placement() {
    let mut ledger = ledger(1_000);
    let wager = ledger.place_bet(100).unwrap();
    assert_eq!(wager.amount, 100);
    assert_eq!(ledger.balance(), 900);
    assert_eq!(ledger.outstanding(), Some(wager));
}

#[test]
fn bet_validation() {
    let mut ledger = Ledger::new(1_000, 10, Some(500));
    assert_eq!(ledger.place_bet(0).unwrap_err(), ValidationError::ZeroBet);
    assert_eq!(
        ledger.place_bet(5).unwrap_err(),
        ValidationError::BelowMinimum { amount: 5, min: 10 }
    );
    assert_eq!(
        ledger.place_bet(600).unwrap_err(),
        ValidationError::AboveMaximum {
            amount: 600,
            max: 500
        }
    );
    assert_eq!(ledger.balance(), 1_000);
    assert!(ledger.outstanding().is_none());

    let mut poor = Ledger::new(50, 10, Some(500));
    assert_eq!(
        poor.place_bet(100).unwrap_err(),
        ValidationError::InsufficientFunds {
            requested: 100,
            available: 50
        }
    );
    assert!(poor.can_bet(50));
    poor.place_bet(50).unwrap();
    assert_eq!(poor.balance(), 0);
    assert!(!poor.can_bet(10));
}

#[test]
fn only_one_outstanding_bet() {
    let mut ledger = ledger(1_000);
    ledger.place_bet(100).unwrap();
    assert_eq!(
        ledger.place_bet(100).unwrap_err(),
        ValidationError::BetOutstanding
    );
    assert_eq!(ledger.balance(), 900);
}

#[test]
fn settlement_relative_to_pre_bet_balance() {
    let payouts = Payouts::default();
    let cases = [
        (Outcome::PlayerBlackjack, 1_150),
        (Outcome::PlayerWin, 1_100),
        (Outcome::Push, 1_000),
        (Outcome::DealerWin, 900),
        (Outcome::PlayerBust, 900),
    ];

    for (outcome, expected) in cases {
        let mut ledger = ledger(1_000);
        ledger.place_bet(100).unwrap();
        let settlement = ledger.settle(outcome, &payouts).unwrap();
        assert_eq!(ledger.balance(), expected, "{outcome:?}");
        assert_eq!(settlement.balance, expected);
        assert_eq!(settlement.net, expected as i64 - 1_000);
    }
}

#[test]
fn blackjack_profit_rounds_once_half_up() {
    let payouts = Payouts::default();
    assert_eq!(payouts.credit(Outcome::PlayerBlackjack, 5).unwrap(), 13);
    assert_eq!(payouts.credit(Outcome::PlayerBlackjack, 1).unwrap(), 3);
    assert_eq!(payouts.credit(Outcome::PlayerBlackjack, 250).unwrap(), 625);

    let floor = Payouts {
        rounding_blackjack: RoundingMode::Down,
        ..Payouts::default()
    };
    assert_eq!(floor.credit(Outcome::PlayerBlackjack, 5).unwrap(), 12);

    let six_five = Payouts {
        blackjack: PayoutRatio::SIX_TO_FIVE,
        ..Payouts::default()
    };
    assert_eq!(six_five.credit(Outcome::PlayerBlackjack, 100).unwrap(), 220);
}

#[test]
fn surrender_refunds_half() {
    let payouts = Payouts::default();
    assert_eq!(payouts.credit(Outcome::Surrendered, 100).unwrap(), 50);
    assert_eq!(payouts.credit(Outcome::Surrendered, 5).unwrap(), 3);

    let down = Payouts {
        rounding_surrender: RoundingMode::Down,
        ..Payouts::default()
    };
    assert_eq!(down.credit(Outcome::Surrendered, 5).unwrap(), 2);
}

#[test]
fn second_settlement_is_rejected() {
    let payouts = Payouts::default();
    let mut ledger = ledger(1_000);
    ledger.place_bet(100).unwrap();
    ledger.settle(Outcome::PlayerWin, &payouts).unwrap();
    assert_eq!(ledger.balance(), 1_100);

    assert_eq!(
        ledger.settle(Outcome::PlayerWin, &payouts).unwrap_err(),
        EngineError::Validation(ValidationError::NoOutstandingBet)
    );
    assert_eq!(ledger.balance(), 1_100);
    assert_eq!(ledger.stats().rounds, 1);
}

#[test]
fn cancel_refunds_without_stats() {
    let mut ledger = ledger(1_000);
    ledger.place_bet(300).unwrap();
    let wager = ledger.cancel_bet().unwrap();
    assert_eq!(wager.amount, 300);
    assert_eq!(ledger.balance(), 1_000);
    assert_eq!(ledger.stats().rounds, 0);
    assert_eq!(
        ledger.cancel_bet().unwrap_err(),
        EngineError::Validation(ValidationError::NoOutstandingBet)
    );
}

#[test]
fn stats_track_outcomes() {
    let payouts = Payouts::default();
    let mut ledger = ledger(10_000);
    let outcomes = [
        Outcome::PlayerBlackjack,
        Outcome::PlayerWin,
        Outcome::Push,
        Outcome::DealerWin,
        Outcome::PlayerBust,
        Outcome::Surrendered,
    ];
    for outcome in outcomes {
        ledger.place_bet(100).unwrap();
        ledger.settle(outcome, &payouts).unwrap();
    }

    let stats = ledger.stats();
    assert_eq!(stats.rounds, 6);
    assert_eq!(stats.wins, 2);
    assert_eq!(outcomes.iter().filter(|o| o.is_player_win()).count(), 2);
    assert_eq!(stats.blackjacks, 1);
    assert_eq!(stats.pushes, 1);
    assert_eq!(stats.losses, 3);
    assert_eq!(stats.surrenders, 1);
    assert_eq!(stats.net, 150 + 100 - 100 - 100 - 50);
    assert_eq!(ledger.balance(), 10_000 + 150 + 100 - 100 - 100 - 50);

    ledger.reset_stats();
    assert_eq!(ledger.stats().rounds, 0);
    assert_eq!(ledger.stats().net, 0);
}

#[test]
fn net_statistic_saturates_on_huge_wins() {
    let payouts = Payouts::default();
    let mut ledger = ledger(1 << 62);

    ledger.place_bet(1 << 62).unwrap();
    let settlement = ledger.settle(Outcome::PlayerWin, &payouts).unwrap();
    assert_eq!(settlement.credited, 1 << 63);
    assert_eq!(settlement.net, 1 << 62);
    assert_eq!(ledger.stats().net, 1 << 62);

    ledger.place_bet(1 << 62).unwrap();
    ledger.settle(Outcome::PlayerWin, &payouts).unwrap();
    assert_eq!(ledger.stats().net, i64::MAX);
    assert_eq!(ledger.balance(), 3 << 62);

    ledger.place_bet(10).unwrap();
    let settlement = ledger.settle(Outcome::PlayerWin, &payouts).unwrap();
    assert_eq!(settlement.net, 10);
    assert_eq!(ledger.stats().net, i64::MAX);
    assert_eq!(ledger.stats().wins, 3);
    assert_eq!(ledger.balance(), (3 << 62) + 10);
}

#[test]
fn deposit_and_withdraw() {
    let mut ledger = ledger(100);
    assert_eq!(ledger.deposit(50).unwrap(), 150);
    assert_eq!(
        ledger.deposit(0).unwrap_err(),
        EngineError::Validation(ValidationError::ZeroAmount)
    );
    assert_eq!(ledger.withdraw(120).unwrap(), 30);
    assert_eq!(
        ledger.withdraw(31).unwrap_err(),
        ValidationError::InsufficientFunds {
            requested: 31,
            available: 30
        }
    );
}

#[test]
fn dollars_format() {
    assert_eq!(Dollars(0).to_string(), "$0.00");
    assert_eq!(Dollars(1_150).to_string(), "$11.50");
    assert_eq!(Dollars(-5).to_string(), "-$0.05");
    assert_eq!(Dollars(123_456).to_string(), "$1234.56");
}

#[test]
fn options_validation() {
    assert!(GameOptions::default().validate().is_ok());
    assert_eq!(
        GameOptions::default().with_decks(0).validate(),
        Err(ConfigError::ZeroDecks)
    );
    assert_eq!(
        GameOptions::default().with_reshuffle_threshold(0).validate(),
        Err(ConfigError::ZeroReshuffleThreshold)
    );
    assert_eq!(
        GameOptions::default()
            .with_blackjack_pays(PayoutRatio::new(3, 0))
            .validate(),
        Err(ConfigError::ZeroPayoutDenominator)
    );
    assert_eq!(
        GameOptions::default().with_bet_limits(0, None).validate(),
        Err(ConfigError::ZeroMinimumBet)
    );
    assert_eq!(
        GameOptions::default()
            .with_bet_limits(100, Some(50))
            .validate(),
        Err(ConfigError::BetLimitsInverted { min: 100, max: 50 })
    );
}
