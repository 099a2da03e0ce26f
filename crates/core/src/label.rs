/// Returns the display name of unknown `index` (zero-based), e.g. `x₁`.
#[must_use]
pub fn unknown_name(index: usize) -> String {
    const DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

    let subscript: String = (index + 1)
        .to_string()
        .bytes()
        .map(|digit| DIGITS[usize::from(digit - b'0')])
        .collect();
    format!("x{subscript}")
}
