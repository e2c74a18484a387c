//! End-to-end simulation tests

use canvas_pong::renderer::{DrawCommand, DrawList};
use canvas_pong::sim::{Ball, Paddle, collides, track_ball};
use canvas_pong::{GameEvent, GameState, RenderStyle, Side, Surface, render, tick};
use glam::Vec2;
use proptest::prelude::*;

fn court() -> GameState {
    GameState::new(Surface::new(800.0, 400.0))
}

#[test]
fn test_opening_rally_until_user_scores() {
    let mut state = court();

    tick(&mut state);
    assert_eq!(state.ball.pos, Vec2::new(405.0, 205.0));
    assert_eq!(state.ball.vel, Vec2::new(5.0, 5.0));

    // Keep the computer paddle out of the way so the ball goes past it
    let mut scored = None;
    for _ in 0..200 {
        state.com.y = -10_000.0;
        let events = tick(&mut state);
        if let Some(event) = events
            .into_iter()
            .find(|e| matches!(e, GameEvent::Scored { .. }))
        {
            scored = Some(event);
            break;
        }
    }

    assert_eq!(
        scored,
        Some(GameEvent::Scored {
            side: Side::User,
            user: 1,
            com: 0
        })
    );
    assert_eq!(state.scores(), (1, 0));
    assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
    assert_eq!(state.ball.speed, 5.0);
    assert_eq!(state.ball.vel.x, -5.0);
}

#[test]
fn test_com_converges_on_static_ball() {
    let mut state = court();
    state.ball.pos.y = 123.0;
    state.com.y = 300.0;

    for _ in 0..500 {
        track_ball(&mut state.com, &state.ball);
    }

    assert!((state.com.y - (123.0 - 50.0)).abs() < 1e-3);
}

#[test]
fn test_com_returns_a_centered_serve() {
    let mut state = court();
    // Send the ball straight at the computer paddle's center
    state.ball.pos = Vec2::new(700.0, 200.0);
    state.ball.vel = Vec2::new(5.0, 0.0);

    let mut hit = false;
    for _ in 0..30 {
        if tick(&mut state)
            .iter()
            .any(|e| matches!(e, GameEvent::PaddleHit { side: Side::Com, .. }))
        {
            hit = true;
            break;
        }
    }

    assert!(hit, "computer paddle should meet a ball aimed at its center");
    assert!(state.ball.vel.x < 0.0);
    assert_eq!(state.ball.speed, 5.5);
    assert_eq!(state.scores(), (0, 0));
}

#[test]
fn test_games_are_independent() {
    let mut a = court();
    let mut b = court();

    a.apply_pointer_input(0.0);
    for _ in 0..50 {
        tick(&mut a);
    }

    assert_eq!(b.ticks, 0);
    assert_eq!(b.user.y, 150.0);
    tick(&mut b);
    assert_eq!(b.ball.pos, Vec2::new(405.0, 205.0));
}

#[test]
fn test_determinism() {
    let mut a = court();
    let mut b = court();
    let pointer = [10.0, 80.0, 200.0, 390.0, -40.0];

    for i in 0..1_000 {
        let y = pointer[i % pointer.len()];
        a.apply_pointer_input(y);
        b.apply_pointer_input(y);
        assert_eq!(tick(&mut a), tick(&mut b));
    }

    assert_eq!(a, b);
}

#[test]
fn test_rendered_frame_tracks_state() {
    let mut state = court();
    state.apply_pointer_input(60.0);
    tick(&mut state);

    let mut list = DrawList::new();
    render(&state, &mut list, &RenderStyle::default());

    let last = list.commands.last().cloned();
    assert_eq!(
        last,
        Some(DrawCommand::Circle {
            x: state.ball.pos.x,
            y: state.ball.pos.y,
            r: 10.0,
            color: canvas_pong::Color::WHITE
        })
    );
    assert!(list.commands.iter().any(|c| matches!(
        c,
        DrawCommand::Rect { x, y, .. } if *x == 0.0 && *y == 10.0
    )));
}

proptest! {
    #[test]
    fn prop_free_flight_is_euler(
        x in 150.0f32..650.0,
        y in 50.0f32..350.0,
        vx in -8.0f32..8.0,
        vy in -8.0f32..8.0,
    ) {
        let mut state = court();
        state.ball.pos = Vec2::new(x, y);
        state.ball.vel = Vec2::new(vx, vy);

        let events = tick(&mut state);

        prop_assert!(events.is_empty());
        prop_assert_eq!(state.ball.pos, Vec2::new(x + vx, y + vy));
        prop_assert_eq!(state.ball.vel, Vec2::new(vx, vy));
    }

    #[test]
    fn prop_tangent_boxes_never_collide(
        paddle_y in -200i32..600,
        ball_y in -200i32..600,
    ) {
        // Whole pixels keep the edge arithmetic exact
        let (paddle_y, ball_y) = (paddle_y as f32, ball_y as f32);
        let surface = Surface::new(800.0, 400.0);
        let mut paddle = Paddle::new(Side::User, &surface);
        paddle.y = paddle_y;

        // ball.left == paddle.right
        let ball = Ball::new(Vec2::new(paddle.x + paddle.width + 10.0, ball_y));
        prop_assert!(!collides(&ball, &paddle));

        // ball.bottom == paddle.top
        let ball = Ball::new(Vec2::new(5.0, paddle_y - 10.0));
        prop_assert!(!collides(&ball, &paddle));
    }

    #[test]
    fn prop_wall_bounce_iff_outside(
        y in -20.0f32..420.0,
        vy in -8.0f32..8.0,
    ) {
        let mut state = court();
        state.ball.pos = Vec2::new(400.0, y);
        state.ball.vel = Vec2::new(0.0, vy);

        tick(&mut state);

        let new_y = y + vy;
        let outside = new_y - 10.0 < 0.0 || new_y + 10.0 > 400.0;
        let expected = if outside { -vy } else { vy };
        prop_assert_eq!(state.ball.vel.y, expected);
    }

    #[test]
    fn prop_pointer_centers_paddle(pointer in -10_000.0f32..10_000.0) {
        let mut state = court();
        state.apply_pointer_input(pointer);
        prop_assert_eq!(state.user.y, pointer - 50.0);
    }

    #[test]
    fn prop_com_single_step(ball_y in -100.0f32..500.0, c0 in -100.0f32..500.0) {
        let mut state = court();
        state.ball.pos.y = ball_y;
        state.com.y = c0;

        track_ball(&mut state.com, &state.ball);

        let expected = c0 + 0.1 * (ball_y - (c0 + 50.0));
        prop_assert!((state.com.y - expected).abs() < 1e-3);
    }
}
