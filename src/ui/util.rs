use rust_decimal::Decimal;

/// Format an amount the Spanish way: dot thousands, comma decimals, euro suffix.
/// e.g. `2450` → `"2.450,00€"`, `-15.99` → `"-15,99€"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let rounded = val.round_dp(2);
    let formatted = format!("{:.2}", rounded.abs());
    let (int_part, dec_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let grouped: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(".");

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}{grouped},{dec_part}€")
}

/// Same as `format_amount` but always shows the sign, for ledger rows.
pub(crate) fn format_signed(val: Decimal) -> String {
    if val > Decimal::ZERO {
        format!("+{}", format_amount(val))
    } else {
        format_amount(val)
    }
}

/// Truncate to `max` visible characters, ending in "…" when cut.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    match max {
        0 => String::new(),
        _ => {
            let kept: String = s.chars().take(max - 1).collect();
            format!("{kept}…")
        }
    }
}

/// Selection and scroll offset for a list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ListCursor {
    pub(crate) index: usize,
    pub(crate) scroll: usize,
}

impl ListCursor {
    pub(crate) fn down(&mut self, len: usize, page: usize) {
        if self.index + 1 < len {
            self.index += 1;
            if self.index >= self.scroll + page.max(1) {
                self.scroll = self.index + 1 - page.max(1);
            }
        }
    }

    pub(crate) fn up(&mut self) {
        self.index = self.index.saturating_sub(1);
        self.scroll = self.scroll.min(self.index);
    }

    pub(crate) fn top(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn bottom(&mut self, len: usize, page: usize) {
        if len > 0 {
            self.index = len - 1;
            self.scroll = len.saturating_sub(page.max(1));
        }
    }

    /// Keep the cursor inside a list that may have shrunk.
    pub(crate) fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.top();
        } else if self.index >= len {
            self.index = len - 1;
            self.scroll = self.scroll.min(self.index);
        }
    }
}
