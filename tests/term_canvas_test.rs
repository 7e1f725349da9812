use tui_blockfall::core::{Board, GameConfig, GridEngine, Palette, PieceShape};
use tui_blockfall::engine::{GameLoop, Surface};
use tui_blockfall::term::{encode_frame, BoardCanvas, CellStyle, Viewport};
use tui_blockfall::types::{CellKind, Rgb};

fn t_config() -> GameConfig {
    GameConfig {
        shapes: vec![PieceShape::canonical(CellKind::T).unwrap()],
        ..GameConfig::default()
    }
}

#[test]
fn draw_uses_palette_colors_and_cell_size() {
    let config = GameConfig {
        cell_width: 3,
        cell_height: 2,
        palette: Palette::default()
            .with(CellKind::Empty, Rgb::new(5, 5, 5))
            .with(CellKind::O, Rgb::new(1, 2, 3)),
        ..t_config()
    };
    let mut board = Board::new(config.cols, config.rows);
    board.set(9, 19, CellKind::O);
    let engine = GridEngine::with_board(&config, board, 1).unwrap();
    let game = GameLoop::new(&config, engine);

    // Exactly the framed play area: 10*3+2 by 20*2+2.
    let mut canvas = BoardCanvas::new(&config, Viewport::new(32, 42));
    game.draw(&mut canvas).unwrap();
    let frame = canvas.frame();

    let o = CellStyle::solid(Rgb::new(1, 2, 3));
    for (x, y) in [(28, 39), (30, 39), (28, 40), (30, 40)] {
        assert_eq!(frame.get(x, y).unwrap().style, o, "({x}, {y})");
    }
    assert_eq!(frame.get(27, 40).unwrap().style, CellStyle::solid(Rgb::new(5, 5, 5)));

    // T top cell at column 5 spans x 16..19 on rows 1 and 2.
    let t = CellStyle::solid(CellKind::T.color());
    assert_eq!(frame.get(16, 1).unwrap().style, t);
    assert_eq!(frame.get(18, 2).unwrap().style, t);
    assert_eq!(frame.get(15, 1).unwrap().ch, ' ');
}

#[test]
fn small_viewport_clips_without_panicking() {
    let config = t_config();
    let mut canvas = BoardCanvas::new(&config, Viewport::new(6, 4));
    canvas.clear(Rgb::new(0, 0, 0));
    for row in 0..config.rows {
        for col in 0..config.cols {
            canvas.fill_cell(col, row, Rgb::new(255, 0, 0));
        }
    }
    canvas.overlay_text("GAME OVER");
    assert_eq!(canvas.frame().width(), 6);
    assert_eq!(canvas.frame().height(), 4);
}

#[test]
fn one_moved_piece_encodes_as_small_diff() {
    let config = t_config();
    let mut canvas = BoardCanvas::new(&config, Viewport::new(22, 22));
    canvas.clear(Rgb::new(0, 0, 0));
    canvas.fill_cell(0, 0, Rgb::new(255, 0, 0));
    let before = canvas.frame().clone();

    canvas.clear(Rgb::new(0, 0, 0));
    canvas.fill_cell(1, 0, Rgb::new(255, 0, 0));
    let after = canvas.frame().clone();

    let mut diff = Vec::new();
    encode_frame(Some(&before), &after, &mut diff).unwrap();
    let text = String::from_utf8_lossy(&diff);
    // Cell 0 becomes background and cell 1 becomes solid: one 4-wide run.
    assert_eq!(text.matches('█').count(), 2);
    assert!(!text.contains('│'));
}
