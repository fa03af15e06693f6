//! In-game HUD - score, level, inventory, and the merchant's offer.

use bevy::prelude::*;

use super::text::{
    inventory_label, level_label, score_label, trade_offer_label, COMPLETION_MESSAGE,
};
use crate::core::{GameState, GameplaySet};
use crate::game::GameSession;

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct LevelText;

#[derive(Component)]
pub struct InventoryText;

/// Marker for the box around the trade offer. Hidden while no offer stands.
#[derive(Component)]
pub struct TradeOfferBox;

#[derive(Component)]
pub struct TradeOfferText;

const HUD_TEXT_COLOR: Color = Color::WHITE;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(Startup, spawn_camera)
        .add_systems(OnEnter(GameState::Playing), spawn_hud)
        .add_systems(
            OnEnter(GameState::Complete),
            (hide_trade_offer, spawn_completion_message),
        )
        .add_systems(
            Update,
            (
                update_score_text,
                update_level_text,
                update_inventory_text,
                update_trade_offer,
            )
                .after(GameplaySet::Apply)
                .run_if(in_state(GameState::Playing)),
        );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands, session: Res<GameSession>) {
    spawn_label(
        &mut commands,
        score_label(session.score()),
        16.0,
        32.0,
        ScoreText,
    );
    spawn_label(
        &mut commands,
        level_label(session.current_level()),
        56.0,
        32.0,
        LevelText,
    );
    spawn_label(
        &mut commands,
        inventory_label(session.inventory()),
        96.0,
        24.0,
        InventoryText,
    );

    // Trade offer (center of screen)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        padding: UiRect::all(Val::Px(10.0)),
                        ..default()
                    },
                    BackgroundColor(Color::BLACK),
                    Visibility::Hidden,
                    TradeOfferBox,
                ))
                .with_children(|offer| {
                    offer.spawn((
                        Text::new(""),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(HUD_TEXT_COLOR),
                        TextLayout::new_with_justify(JustifyText::Center),
                        TradeOfferText,
                    ));
                });
        });
}

/// Helper to spawn a text line pinned to the top-left corner.
fn spawn_label<M: Component>(
    commands: &mut Commands,
    text: String,
    top: f32,
    font_size: f32,
    marker: M,
) {
    commands.spawn((
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(HUD_TEXT_COLOR),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(top),
            ..default()
        },
        marker,
    ));
}

fn update_score_text(session: Res<GameSession>, mut query: Query<&mut Text, With<ScoreText>>) {
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };
    text.0 = score_label(session.score());
}

fn update_level_text(session: Res<GameSession>, mut query: Query<&mut Text, With<LevelText>>) {
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };
    text.0 = level_label(session.current_level());
}

fn update_inventory_text(
    session: Res<GameSession>,
    mut query: Query<&mut Text, With<InventoryText>>,
) {
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };
    text.0 = inventory_label(session.inventory());
}

/// Show the standing offer with the live count of the merchant's fruit.
fn update_trade_offer(
    session: Res<GameSession>,
    mut box_query: Query<&mut Visibility, With<TradeOfferBox>>,
    mut text_query: Query<&mut Text, With<TradeOfferText>>,
) {
    let Ok(mut visibility) = box_query.get_single_mut() else {
        return;
    };
    let Ok(mut text) = text_query.get_single_mut() else {
        return;
    };

    let merchant = session
        .trade_offer()
        .and_then(|id| session.registry().merchant(id));

    match merchant {
        Some(merchant) => {
            let count = session.inventory().count(merchant.speciality);
            text.0 = trade_offer_label(count, merchant.speciality, merchant.multiplier);
            *visibility = Visibility::Inherited;
        }
        None => *visibility = Visibility::Hidden,
    }
}

fn hide_trade_offer(mut query: Query<&mut Visibility, With<TradeOfferBox>>) {
    for mut visibility in query.iter_mut() {
        *visibility = Visibility::Hidden;
    }
}

fn spawn_completion_message(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(COMPLETION_MESSAGE),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(HUD_TEXT_COLOR),
            ));
        });
}
