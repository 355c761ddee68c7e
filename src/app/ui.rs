use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
};

use crate::{
    app::{
        Field, Portfolio,
        calc::VAT_RATE,
        utils::format_percent,
    },
    models::{DisplayRow, DisplayTotals, MarginMode},
};

pub fn render(
    frame: &mut Frame,
    portfolio: &Portfolio,
    table_state: &mut TableState,
    field: Field,
    popup_message: &Option<String>,
    error_popup: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(9),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Profit Calculator")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, chunks[0]);

    let evaluation = portfolio.evaluate();

    let header_cells = [
        "#",
        "Base",
        "Cost + VAT",
        "Mode",
        "Margin",
        "Equivalent",
        "Class",
        "Sale price",
        "Withholding",
        "Net",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).style(Style::default()).height(1);

    let selected = table_state.selected();
    let focused = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let rows = portfolio
        .rows()
        .iter()
        .zip(evaluation.metrics())
        .enumerate()
        .map(|(i, (item, metrics))| {
            let display = DisplayRow::from(metrics);
            let field_style = |cell_field: Field| {
                if selected == Some(i) && field == cell_field {
                    focused
                } else {
                    Style::default()
                }
            };

            let margin_input = match item.margin_mode() {
                MarginMode::Percent => format!("{}%", item.margin_value()),
                MarginMode::Fixed => format!("$ {}", item.margin_value()),
            };

            let color_net = if *metrics.net_receivable() >= 0.0 {
                Color::Green
            } else {
                Color::Red
            };

            let cells = [
                Cell::from(item.id().to_string()),
                Cell::from(format!("$ {}", item.base_amount()))
                    .style(field_style(Field::BaseAmount)),
                Cell::from(display.cost_with_vat().clone()),
                Cell::from(item.margin_mode().to_string()).style(field_style(Field::MarginMode)),
                Cell::from(margin_input).style(field_style(Field::MarginValue)),
                Cell::from(format!("+{}", display.margin_counterpart()))
                    .style(Style::default().fg(Color::Green)),
                Cell::from(format!(
                    "{} ({})",
                    item.withholding_class(),
                    display.withholding_rate()
                ))
                .style(field_style(Field::WithholdingClass)),
                Cell::from(display.sale_price().clone()),
                Cell::from(format!("-{}", display.withholding_amount()))
                    .style(Style::default().fg(Color::Red)),
                Cell::from(display.net_receivable().clone()).style(Style::default().fg(color_net)),
            ];

            Row::new(cells).height(1)
        });

    let widths = [
        Constraint::Length(4),
        Constraint::Length(16),
        Constraint::Length(16),
        Constraint::Length(9),
        Constraint::Length(14),
        Constraint::Length(16),
        Constraint::Length(17),
        Constraint::Length(16),
        Constraint::Length(15),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!("Line items (editing {})", field))
                .borders(Borders::ALL),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, chunks[1], table_state);

    render_totals(frame, &DisplayTotals::from(evaluation.totals()), chunks[2]);

    let help = Paragraph::new(
        "↑/↓ row  ←/→ field  0-9 . - edit  Space toggle  F2 add  F3 remove  F4 export  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    if let Some(message) = popup_message {
        render_popup(frame, "Info", message, Color::Cyan);
    }

    if let Some(message) = error_popup {
        render_popup(frame, "Error", message, Color::Red);
    }
}

fn render_totals(frame: &mut Frame, totals: &DisplayTotals, area: Rect) {
    let label = Style::default().fg(Color::Yellow);
    let lines = vec![
        Line::from(vec![
            Span::styled("Base total:          ", label),
            Span::raw(totals.base().clone()),
        ]),
        Line::from(vec![
            Span::styled(format!("VAT ({}):       ", format_percent(VAT_RATE)), label),
            Span::raw(totals.vat().clone()),
        ]),
        Line::from(vec![
            Span::styled("Purchase cost:       ", label),
            Span::raw(totals.cost_with_vat().clone()),
        ]),
        Line::from(vec![
            Span::styled("Estimated margin:    ", label),
            Span::styled(
                format!("+{}", totals.margin_amount()),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Total withholding:   ", label),
            Span::styled(
                format!("-{}", totals.withholding_amount()),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(vec![
            Span::styled("Net receivable:      ", label.add_modifier(Modifier::BOLD)),
            Span::styled(
                totals.net_receivable().clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let panel = Paragraph::new(lines).block(Block::default().title("Totals").borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn render_popup(frame: &mut Frame, title: &str, message: &str, color: Color) {
    let area = centered_rect(60, 5, frame.area());
    let popup = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
