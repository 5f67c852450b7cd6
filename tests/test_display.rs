use space_invaders::compute::init_state;
use space_invaders::display::render;
use space_invaders::entities::GameStatus;

#[test]
fn render_same_state_twice_is_identical() {
    let state = init_state();
    let mut first: Vec<u8> = Vec::new();
    let mut second: Vec<u8> = Vec::new();
    render(&mut first, &state, 80, 24).unwrap();
    render(&mut second, &state, 80, 24).unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn render_game_over_shows_overlay() {
    let mut state = init_state();
    let mut playing: Vec<u8> = Vec::new();
    render(&mut playing, &state, 80, 24).unwrap();
    assert!(!String::from_utf8_lossy(&playing).contains("GAME  OVER"));

    state.status = GameStatus::GameOver;
    let mut over: Vec<u8> = Vec::new();
    render(&mut over, &state, 80, 24).unwrap();
    assert!(String::from_utf8_lossy(&over).contains("GAME  OVER"));
}

#[test]
fn render_survives_a_tiny_terminal() {
    let state = init_state();
    let mut buf: Vec<u8> = Vec::new();
    render(&mut buf, &state, 5, 4).unwrap();
}

#[test]
fn render_does_not_mutate_state() {
    let state = init_state();
    let mut buf: Vec<u8> = Vec::new();
    render(&mut buf, &state, 80, 24).unwrap();
    assert_eq!(state.frame, 0);
    assert_eq!(state.formation.enemies.len(), 72);
    assert!(state.player.shots.is_empty());
}
