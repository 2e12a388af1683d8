//! Box-drawn die faces.

/// Width of a rendered die in terminal cells.
pub const DIE_WIDTH: usize = 9;

/// Height of a rendered die in terminal rows.
pub const DIE_HEIGHT: usize = 5;

const PIP: char = '\u{25cf}';

/// The three pip rows of a face (7 cells wide). Out-of-range faces draw as 1.
fn pip_rows(face: u8) -> [&'static str; 3] {
    match face {
        2 => [" o     ", "       ", "     o "],
        3 => [" o     ", "   o   ", "     o "],
        4 => [" o   o ", "       ", " o   o "],
        5 => [" o   o ", "   o   ", " o   o "],
        6 => [" o   o ", " o   o ", " o   o "],
        _ => ["       ", "   o   ", "       "],
    }
}

/// Render a die face as `DIE_HEIGHT` lines of `DIE_WIDTH` cells.
pub fn die_lines(face: u8) -> [String; DIE_HEIGHT] {
    let [top, mid, bottom] = pip_rows(face).map(|row| row.replace('o', &PIP.to_string()));
    [
        "\u{250c}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2510}".to_string(),
        format!("\u{2502}{top}\u{2502}"),
        format!("\u{2502}{mid}\u{2502}"),
        format!("\u{2502}{bottom}\u{2502}"),
        "\u{2514}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2518}".to_string(),
    ]
}
