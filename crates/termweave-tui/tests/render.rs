use proptest::prelude::*;
use termweave_tui::layout::{Alignment, ColumnWidth};
use termweave_tui::style::{Color, Style};
use termweave_tui::theme::{keys, Theme};
use termweave_tui::widget::{Column, Panel, Renderable, Row, Table, Text, Whitespace, Widget};

/// Glyphs whose width differs from their char count: combining marks,
/// variation selectors, ZWJ sequences and zero-width spaces
fn tricky_glyph() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("e\u{301}".to_string()),
        Just("\u{2764}\u{FE0F}".to_string()),
        Just("\u{1F469}\u{200D}\u{1F4BB}".to_string()),
        Just("a\u{200B}b".to_string()),
        Just("\u{1F44D}\u{1F3FD}".to_string()),
    ]
}

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}",
        Just("世界".to_string()),
        Just("  ".to_string()),
        tricky_glyph(),
        (tricky_glyph(), "[a-z]{1,3}").prop_map(|(g, w)| format!("{}{}", g, w)),
    ]
}

fn words() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..12).prop_map(|words| words.join(" "))
}

fn title() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{0,6}",
        tricky_glyph(),
        (tricky_glyph(), "[a-z]{0,4}").prop_map(|(g, w)| g + &w),
    ]
}

fn alignment() -> impl Strategy<Value = Alignment> {
    prop_oneof![
        Just(Alignment::None),
        Just(Alignment::Left),
        Just(Alignment::Center),
        Just(Alignment::Right),
        Just(Alignment::Justify),
    ]
}

fn assert_exact_width(widget: &dyn Renderable, theme: &Theme, width: usize) {
    for line in widget.render(theme, width) {
        assert_eq!(line.width(), width, "line {:?}", line.plain());
    }
}

proptest! {
    #[test]
    fn text_lines_fill_width(content in words(), align in alignment(), extra in 0usize..20) {
        let theme = Theme::empty();
        let text = Text::new(content).align(align);
        let width = text.measure(&theme, 80).min + extra;
        assert_exact_width(&text, &theme, width);
    }

    #[test]
    fn panel_lines_fill_width(content in words(), title in title(), extra in 0usize..20) {
        let theme = Theme::dark();
        let mut panel = Panel::new(Text::new(content));
        if !title.is_empty() {
            panel = panel.title(title);
        }
        let width = panel.measure(&theme, 80).min + extra;
        assert_exact_width(&panel, &theme, width);
    }

    #[test]
    fn table_lines_fill_width(
        cells in prop::collection::vec(words(), 1..4),
        extra in 0usize..20,
        bordered in any::<bool>(),
    ) {
        let theme = Theme::empty();
        let mut table = Table::new()
            .column(ColumnWidth::Auto)
            .column(ColumnWidth::Expand)
            .row(Row::new(cells.iter().map(|c| Text::new(c.clone()))));
        if bordered {
            table = table.border(Some(Default::default()));
        }
        let width = table.measure(&theme, 80).min + extra;
        assert_exact_width(&table, &theme, width);
    }

    #[test]
    fn rendering_is_idempotent(content in words(), width in 1usize..40) {
        let theme = Theme::dark();
        let widget = Widget::from(Panel::new(Text::new(content)).title("t"));
        prop_assert_eq!(widget.render(&theme, width), widget.render(&theme, width));
    }
}

#[test]
fn emoji_sequences_render_at_measured_width() {
    let theme = Theme::empty();
    let text = Text::new("\u{2764}\u{FE0F}\u{2764}\u{FE0F}").whitespace(Whitespace::Pre);
    let min = text.measure(&theme, 80).min;
    for align in [Alignment::Left, Alignment::Center, Alignment::Right] {
        let lines = text.clone().align(align).render(&theme, min);
        assert_eq!(lines.width(), min);
        assert_eq!(lines.plain(), "\u{2764}\u{FE0F}\u{2764}\u{FE0F}");
    }
}

#[test]
fn panel_title_with_combining_marks_fits() {
    let theme = Theme::empty();
    let panel = Panel::new(Text::new("body")).title("cafe\u{301} \u{1F469}\u{200D}\u{1F4BB}");
    let min = panel.measure(&theme, 80).min;
    for width in [min, min + 3, min + 10] {
        for line in panel.render(&theme, width) {
            assert_eq!(line.width(), width, "line {:?}", line.plain());
        }
    }
}

#[test]
fn pre_text_keeps_whitespace() {
    let text = Text::new("a  b\n  c").whitespace(Whitespace::Pre);
    let lines = text.render(&Theme::empty(), 6);
    assert_eq!(lines.plain(), "a  b  \n  c   ");
}

#[test]
fn border_override_changes_only_border() {
    let content = Style::new().fg(Color::GREEN);
    let panel = Panel::new(Text::styled("x", content));
    let plain = panel.render(&Theme::empty(), 3);
    let themed = panel.render(
        &Theme::empty().with_style(keys::PANEL_BORDER, Style::new().fg(Color::RED)),
        3,
    );

    assert_eq!(plain.plain(), themed.plain());
    assert_eq!(themed.lines[1].spans[1].style, content);
    assert_eq!(themed.lines[0].spans[0].style.fg, Some(Color::RED));
}

#[test]
fn aligned_columns_share_width_across_rows() {
    let table = Table::new()
        .columns([Column::new(ColumnWidth::Auto).align(Alignment::Right), Column::default()])
        .spacing(1)
        .row(Row::new(["1", "a"]))
        .row(Row::new(["1000", "b"]));
    let lines = table.render(&Theme::empty(), 6);
    assert_eq!(lines.plain(), "   1 a\n1000 b");
}

#[test]
fn weighted_columns_split_remainder() {
    let table = Table::new()
        .columns([ColumnWidth::Weighted(1), ColumnWidth::Weighted(2)])
        .spacing(0)
        .row(Row::new(["", ""]));
    let lines = table.render(&Theme::empty(), 10);
    assert_eq!(lines.lines[0].width(), 10);
}
