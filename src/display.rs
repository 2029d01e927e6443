//! Rendering layer: turns the game into plain text, one string per screen.
//!
//! Nothing here changes game state. The finished string goes to a
//! `RenderTarget`, which replaces whatever it showed before.

use std::io::Write;
use std::time::Duration;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::board::Board;
use crate::game::Game;
use crate::menu::{MenuOption, Screen, ScreenKind};

const INNER_WIDTH: usize = 43;
const VERSION: &str = env!("CARGO_PKG_VERSION");

// ── Render target ────────────────────────────────────────────────────────────

/// A passive text surface. Each `present` replaces the whole content.
pub trait RenderTarget {
    fn present(&mut self, text: &str) -> std::io::Result<()>;
}

impl RenderTarget for String {
    fn present(&mut self, text: &str) -> std::io::Result<()> {
        self.clear();
        self.push_str(text);
        Ok(())
    }
}

/// Light grey on black, drawn line by line from the top-left corner.
#[derive(Debug)]
pub struct TerminalTarget<W: Write> {
    out: W,
}

impl<W: Write> TerminalTarget<W> {
    pub const fn new(out: W) -> Self {
        TerminalTarget { out }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> RenderTarget for TerminalTarget<W> {
    fn present(&mut self, text: &str) -> std::io::Result<()> {
        self.out.queue(style::SetBackgroundColor(Color::Black))?;
        self.out.queue(style::SetForegroundColor(Color::Grey))?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        for (row, line) in text.lines().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            self.out.queue(cursor::MoveTo(0, row))?;
            self.out.queue(Print(line))?;
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }
}

// ── Public entry point ───────────────────────────────────────────────────────

pub fn render(game: &Game) -> String {
    let lines = match game.visible.kind {
        ScreenKind::Title => title(&game.visible),
        ScreenKind::GameInterface => gameplay(game),
        ScreenKind::Information => information(),
        ScreenKind::Options => options(game.reverse_controls),
        ScreenKind::Pause => pause(&game.visible),
        ScreenKind::GameOver => game_over(&game.session.board),
        ScreenKind::Continue => continue_screen(game),
    };
    lines.join("\n")
}

// ── Frame helpers ────────────────────────────────────────────────────────────

fn rule() -> String {
    format!(" {}-", "-=".repeat(21))
}

fn framed(open: char, text: &str, close: char) -> String {
    format!("{open}{text:<width$}{close}", width = INNER_WIDTH)
}

fn line(text: &str) -> String {
    framed('/', text, '/')
}

fn blanks(out: &mut Vec<String>, count: usize) {
    out.extend((0..count).map(|_| line("")));
}

fn option_lines(out: &mut Vec<String>, options: &[MenuOption], cursor: usize, margin: usize) {
    for (i, option) in options.iter().enumerate() {
        let marker = if i == cursor { ">  " } else { "   " };
        out.push(line(&format!("{:margin$}{marker}{}", "", option.label)));
    }
}

fn open_page() -> Vec<String> {
    vec![rule(), framed('/', "", '\\')]
}

fn close_page(out: &mut Vec<String>) {
    out.push(framed('\\', "", '/'));
    out.push(rule());
}

// ── Menus ────────────────────────────────────────────────────────────────────

fn title(screen: &Screen) -> Vec<String> {
    let mut out = open_page();
    blanks(&mut out, 6);
    out.push(line("          A Song of Birch and Silk"));
    out.push(line("        ____________________________"));
    blanks(&mut out, 3);
    option_lines(&mut out, screen.options(), screen.cursor, 8);
    blanks(&mut out, 4);
    out.push(framed('\\', &format!("{:>41}  ", format!("ver {VERSION}")), '/'));
    out.push(rule());
    out
}

fn pause(screen: &Screen) -> Vec<String> {
    let mut out = open_page();
    blanks(&mut out, 7);
    option_lines(&mut out, screen.options(), screen.cursor, 2);
    blanks(&mut out, 7);
    close_page(&mut out);
    out
}

fn information() -> Vec<String> {
    let mut out = open_page();
    for text in [
        "         m <--- this is a spider",
        "         @ <--- this is you",
        "",
        "",
        "   - Move using [WASD]",
        "",
        "   - Wait by pressing [SPACEBAR]",
        "",
        "   - Shoot using the [ARROW KEYS]",
        "",
        "   - [ESC] accesses the in-game menu",
        "",
        "   - You must have an arrow fully",
        "     drawn before you can shoot",
        "",
        "   - It takes [3 TURNS] to fully draw",
        "     an arrow while moving",
        "",
        "   - But just [1 TURN] if you wait",
    ] {
        out.push(line(text));
    }
    close_page(&mut out);
    out
}

fn options(reverse_controls: bool) -> Vec<String> {
    let mut out = open_page();
    blanks(&mut out, 7);
    let (scheme, explanation) = if reverse_controls {
        ("  Default  [Reverse]", "    Arrows are fired in the opposite")
    } else {
        (" [Default]  Reverse", "    Arrows are fired in the same")
    };
    out.push(line(&format!("   Control scheme: {scheme}")));
    blanks(&mut out, 1);
    out.push(line(explanation));
    out.push(line("    direction of the pressed arrow key"));
    blanks(&mut out, 8);
    close_page(&mut out);
    out
}

fn continue_screen(game: &Game) -> Vec<String> {
    let mut out = open_page();
    blanks(&mut out, 4);
    out.push(line(&format!(
        "{:^width$}",
        format!("- {:03} -", game.session.score),
        width = INNER_WIDTH
    )));
    blanks(&mut out, 1);
    out.push(line(&format!(
        "{:^width$}",
        format_elapsed(game.session.elapsed()),
        width = INNER_WIDTH
    )));
    blanks(&mut out, 3);
    option_lines(&mut out, game.visible.options(), game.visible.cursor, 14);
    blanks(&mut out, 7);
    close_page(&mut out);
    out
}

/// `MM:SS:mmm`, minutes wrapping at the hour.
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    format!(
        "{:02}:{:02}:{:03}",
        (millis / 60_000) % 60,
        (millis / 1000) % 60,
        millis % 1000
    )
}

// ── Board screens ────────────────────────────────────────────────────────────

/// Bow-draw bar contents, indexed by the reload counter.
const BOW_DRAW: [&str; 4] = [
    " =-------------> ",
    "    ---------    ",
    "       ---       ",
    "                 ",
];

fn gameplay(game: &Game) -> Vec<String> {
    let draw = BOW_DRAW[usize::from(game.session.player.reload).min(BOW_DRAW.len() - 1)];
    let mut out = vec![format!(" -=-=-=-=-=-=[{draw}]=-=-=-=-=-=-")];
    out.extend(board_lines(&game.session.board));
    out.push(format!(
        " -=-=-=-=-=-=-=-=-=[ {:03} ]=-=-=-=-=-=-=-=-=-",
        game.session.score
    ));
    out
}

fn game_over(board: &Board) -> Vec<String> {
    let mut out = vec![" -=-=-=-=-=-=-=-[ GAME OVER ]-=-=-=-=-=-=-=-".to_string()];
    out.extend(board_lines(board));
    out.push(" -=-=-=-=-[ Press ESC to continue ]-=-=-=-=-".to_string());
    out
}

/// The board framed by slashes, one glyph per cell followed by a space.
pub fn board_lines(board: &Board) -> Vec<String> {
    let last = board.rows() - 1;
    (0..board.rows())
        .map(|r| {
            let mut s = String::from(if r == last { "\\ " } else { "/ " });
            for cell in board.row(r) {
                s.push(cell.glyph());
                s.push(' ');
            }
            s.push(if r == 0 { '\\' } else { '/' });
            s
        })
        .collect()
}
