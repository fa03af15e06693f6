//! Whole-run scenarios driven through the session and the resolver.

use std::time::Duration;

use bevy::prelude::*;

use legend_of_kokopelli::core::{OverlapEvent, OverlapTarget};
use legend_of_kokopelli::economy::FruitKind;
use legend_of_kokopelli::game::{Advance, GameSession, Phase};
use legend_of_kokopelli::interaction::{resolve_overlap, resolve_trade, Resolution};
use legend_of_kokopelli::world::{FruitId, LevelTable, MerchantId};

fn new_session(seed: u64) -> GameSession {
    GameSession::new(LevelTable::default(), Some(seed))
}

fn touch(session: &mut GameSession, target: OverlapTarget) -> Resolution {
    let event = OverlapEvent {
        source: Entity::PLACEHOLDER,
        target,
    };
    resolve_overlap(session, &event)
}

fn collect_all(session: &mut GameSession) {
    let ids: Vec<FruitId> = session.registry().fruits().map(|fruit| fruit.id).collect();
    for id in ids {
        touch(session, OverlapTarget::Fruit(id));
    }
}

fn merchant_position(session: &GameSession, kind: FruitKind) -> Vec2 {
    session
        .registry()
        .merchants()
        .iter()
        .find(|merchant| merchant.speciality == kind)
        .map(|merchant| merchant.position)
        .unwrap()
}

#[test]
fn clearing_level_one_opens_level_two() {
    let mut session = new_session(1);
    assert_eq!(session.phase(), Phase::Playing(1));
    assert_eq!(session.registry().fruit_count(), 5);

    collect_all(&mut session);
    assert_eq!(session.inventory().total(), 5);

    let result = touch(&mut session, OverlapTarget::Portal);

    assert_eq!(result, Resolution::Advanced(Advance::NextLevel(2)));
    assert_eq!(session.phase(), Phase::Playing(2));
    assert!(session.inventory().is_empty());
    assert_eq!(session.registry().fruit_count(), 5);
    assert_eq!(session.trade_offer(), None);
}

#[test]
fn portal_is_shut_while_fruit_remains() {
    let mut session = new_session(2);
    let first = session.registry().fruits().next().unwrap().id;
    touch(&mut session, OverlapTarget::Fruit(first));

    assert_eq!(touch(&mut session, OverlapTarget::Portal), Resolution::Ignored);
    assert_eq!(session.phase(), Phase::Playing(1));
    assert_eq!(session.registry().fruit_count(), 4);
}

#[test]
fn last_level_completes_the_run_and_freezes_it() {
    let mut session = new_session(3);

    for level in 1..=3 {
        assert_eq!(session.phase(), Phase::Playing(level));
        collect_all(&mut session);
        touch(&mut session, OverlapTarget::Portal);
    }

    assert_eq!(session.phase(), Phase::Complete);
    assert!(session.is_complete());

    let score = session.score();
    assert_eq!(session.try_advance(true), Advance::Blocked);
    assert_eq!(touch(&mut session, OverlapTarget::Portal), Resolution::Ignored);
    assert_eq!(
        resolve_trade(&mut session, Vec2::new(200.0, 500.0)),
        Resolution::Ignored
    );
    assert!(!session.trigger_power_up(Duration::from_secs(1)));
    assert_eq!(session.score(), score);
    assert_eq!(session.phase(), Phase::Complete);
}

#[test]
fn trading_at_a_merchant_pays_floored_value() {
    let mut session = new_session(4);

    // Five fruit over three kinds: some kind appears at least twice.
    let fruit: Vec<(FruitId, FruitKind)> = session
        .registry()
        .fruits()
        .map(|fruit| (fruit.id, fruit.kind))
        .collect();
    let kind = FruitKind::ALL
        .into_iter()
        .find(|kind| fruit.iter().filter(|(_, k)| k == kind).count() >= 2)
        .unwrap();
    let pair: Vec<FruitId> = fruit
        .iter()
        .filter(|(_, k)| *k == kind)
        .take(2)
        .map(|(id, _)| *id)
        .collect();
    for id in pair {
        touch(&mut session, OverlapTarget::Fruit(id));
    }
    assert_eq!(session.inventory().count(kind), 2);

    let position = merchant_position(&session, kind);
    let result = resolve_trade(&mut session, position);

    let expected = match kind {
        FruitKind::Apple => 30,
        FruitKind::Banana => 72,
        FruitKind::Pineapple => 120,
    };
    let Resolution::Traded { receipt, .. } = result else {
        panic!("expected a trade, got {result:?}");
    };
    let receipt = receipt.unwrap();
    assert_eq!(receipt.traded, 2);
    assert_eq!(receipt.payout, expected);
    assert_eq!(session.score().value(), expected);
    assert_eq!(session.inventory().count(kind), 0);
}

#[test]
fn trading_far_from_merchants_does_nothing() {
    let mut session = new_session(5);
    collect_all(&mut session);
    let before = *session.inventory();

    let result = resolve_trade(&mut session, Vec2::new(100.0, 100.0));

    assert_eq!(result, Resolution::Ignored);
    assert_eq!(*session.inventory(), before);
    assert_eq!(session.score().value(), 0);
}

#[test]
fn merchant_overlap_shows_offer_and_trade_clears_it() {
    let mut session = new_session(6);
    let id = MerchantId(2);

    assert_eq!(
        touch(&mut session, OverlapTarget::Merchant(id)),
        Resolution::OfferShown(id)
    );
    assert_eq!(session.trade_offer(), Some(id));

    let position = session.registry().merchant(id).unwrap().position;
    let result = resolve_trade(&mut session, position);

    assert_eq!(
        result,
        Resolution::Traded {
            merchant: id,
            receipt: None
        }
    );
    assert_eq!(session.trade_offer(), None);
}

#[test]
fn score_survives_level_changes() {
    let mut session = new_session(7);
    collect_all(&mut session);

    for kind in FruitKind::ALL {
        let position = merchant_position(&session, kind);
        resolve_trade(&mut session, position);
    }
    let earned = session.score();
    assert!(earned.value() > 0);
    assert!(session.inventory().is_empty());

    touch(&mut session, OverlapTarget::Portal);

    assert_eq!(session.phase(), Phase::Playing(2));
    assert_eq!(session.score(), earned);
}

#[test]
fn stale_fruit_id_from_previous_level_is_ignored() {
    let mut session = new_session(8);
    let old = session.registry().fruits().next().unwrap().id;
    collect_all(&mut session);
    touch(&mut session, OverlapTarget::Portal);

    assert_eq!(touch(&mut session, OverlapTarget::Fruit(old)), Resolution::Ignored);
    assert_eq!(session.registry().fruit_count(), 5);
    assert!(session.inventory().is_empty());
}

#[test]
fn flute_boost_lasts_one_second() {
    let mut session = new_session(9);
    let start = Duration::from_millis(2_000);

    assert!(session.trigger_power_up(start));
    assert!(session.power_up_active(start + Duration::from_millis(999)));
    assert!(!session.power_up_active(start + Duration::from_millis(1_000)));
    assert!(session.expire_power_up(start + Duration::from_millis(1_000)));
    assert!(!session.expire_power_up(start + Duration::from_millis(1_001)));
}

#[test]
fn same_seed_places_fruit_identically() {
    let a = new_session(11);
    let b = new_session(11);

    let positions = |session: &GameSession| -> Vec<(Vec2, FruitKind)> {
        session
            .registry()
            .fruits()
            .map(|fruit| (fruit.position, fruit.kind))
            .collect()
    };
    assert_eq!(positions(&a), positions(&b));
}
