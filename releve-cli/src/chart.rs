//! Terminal bar charts for the aggregate reports.
//!
//! Four panels: balances and income vs. expenses, monthly on top and
//! quarterly below. Bars run oldest to newest left to right, which reverses
//! the reports' newest-first bucket order.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use releve_core::AggregateReport;

use crate::fmt;

/// Show the chart dashboard until q, Esc, or Ctrl-C is pressed.
///
/// Sets up the terminal and a panic hook, then restores the terminal on
/// every exit path.
pub fn show(monthly: &AggregateReport, quarterly: &AggregateReport) -> Result<()> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        hook(info);
    }));

    let mut terminal = ratatui::init();

    let result = loop {
        if let Err(e) = terminal.draw(|frame| draw(frame, monthly, quarterly)) {
            break Err(e.into());
        }
        match event::read() {
            Err(e) => break Err(e.into()),
            Ok(Event::Key(key)) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c');
                if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break Ok(());
                }
            }
            Ok(_) => {}
        }
    };

    drop(terminal);
    ratatui::restore();
    result
}

fn draw(frame: &mut Frame, monthly: &AggregateReport, quarterly: &AggregateReport) {
    let [top, bottom] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(frame.area());
    let [top_left, top_right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(top);
    let [bottom_left, bottom_right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(bottom);

    balance_chart(frame, top_left, "Monthly Balances", monthly);
    flow_chart(frame, top_right, "Monthly Income and Expenses", monthly);
    balance_chart(frame, bottom_left, "Quarterly Balances", quarterly);
    flow_chart(frame, bottom_right, "Quarterly Income and Expenses", quarterly);
}

/// One bar per period at the balance's magnitude, green when the period
/// ends positive and red when it ends negative; the signed amount is the
/// bar's text label.
fn balance_chart(frame: &mut Frame, area: Rect, title: &str, report: &AggregateReport) {
    let bars: Vec<Bar> = report
        .iter()
        .rev()
        .map(|(label, totals)| {
            let color = if totals.balance_cents < 0 {
                Color::Red
            } else {
                Color::Green
            };
            Bar::default()
                .label(Line::from(label.to_string()))
                .value(totals.balance_cents.unsigned_abs())
                .text_value(fmt::cents(totals.balance_cents))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .bar_width(9)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

/// Grouped income (green) and expense (red) bars per period, both drawn at
/// their magnitude.
fn flow_chart(frame: &mut Frame, area: Rect, title: &str, report: &AggregateReport) {
    let income_style = Style::default().fg(Color::Green);
    let expense_style = Style::default().fg(Color::Red);

    let groups: Vec<BarGroup> = report
        .iter()
        .rev()
        .map(|(label, totals)| {
            let bars = [
                side_bar(totals.income_cents, income_style),
                side_bar(totals.expense_cents, expense_style),
            ];
            BarGroup::default()
                .label(Line::from(label.to_string()))
                .bars(&bars)
        })
        .collect();

    let mut chart = BarChart::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .bar_width(8)
        .bar_gap(1)
        .group_gap(2);
    for group in groups {
        chart = chart.data(group);
    }
    frame.render_widget(chart, area);
}

fn side_bar(cents: i64, style: Style) -> Bar<'static> {
    Bar::default()
        .value(cents.unsigned_abs())
        .text_value(fmt::cents(cents.abs()))
        .style(style)
}
