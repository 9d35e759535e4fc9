//! Dealer panel: margin breakdown, rating gauge and sales recommendations

use super::format::{format_currency, format_percent};
use crate::app::AppState;
use crate::logic::analysis::{MarginAnalysis, Recommendation};
use crate::theme::{Colors, Styles};
use crate::types::MarginRating;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Text shown for a recommendation
pub fn recommendation_text(recommendation: &Recommendation) -> String {
    match recommendation {
        Recommendation::SuggestPopularOptions => {
            "Add more options: suggest popular upgrades like a limited slip axle or spare tire \
             package."
                .to_string()
        }
        Recommendation::BelowAverageMargin => {
            "Low margin: this configuration is below average. Highlight value-added options."
                .to_string()
        }
        Recommendation::FinancingEligible(total) => format!(
            "Financing: a {} configuration qualifies for commercial financing programs.",
            format_currency(*total)
        ),
    }
}

fn rating_style(rating: MarginRating) -> Style {
    match rating {
        MarginRating::Excellent => Styles::success(),
        MarginRating::Good => Styles::warning(),
        MarginRating::BelowTarget => Styles::error(),
    }
}

pub fn render_dealer_panel(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Dealer Analysis ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Colors::SECONDARY));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let session = &state.session;
    if session.selected_vehicle().is_none() {
        f.render_widget(
            Paragraph::new(Span::styled("Select a vehicle to see margins", Styles::text_muted())),
            inner,
        );
        return;
    }

    let pricing = session.pricing();
    let analysis = MarginAnalysis::from_pricing(&pricing);
    let option_count = session.selected_options().len();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Margin figures
            Constraint::Length(1), // Gauge
            Constraint::Min(0),    // Recommendations
        ])
        .split(inner);

    let figures = vec![
        Line::from(vec![
            Span::styled("Base margin     ", Styles::text()),
            Span::styled(format_currency(analysis.base_margin), Styles::success()),
            Span::styled(
                format!("  ({})", format_percent(analysis.base_margin_percent)),
                Styles::text_muted(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Options margin  ", Styles::text()),
            Span::styled(format_currency(analysis.options_margin), Styles::success()),
            Span::styled(format!("  ({} options)", option_count), Styles::text_muted()),
        ]),
        Line::from(vec![
            Span::styled("Total margin    ", Styles::text_bold()),
            Span::styled(format_currency(analysis.margin), Styles::success()),
            Span::styled(
                format!("  ({} margin)", format_percent(analysis.margin_percent)),
                Styles::text_muted(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Rating          ", Styles::text()),
            Span::styled(analysis.rating.to_string(), rating_style(analysis.rating)),
        ]),
    ];
    f.render_widget(Paragraph::new(figures), chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(rating_style(analysis.rating).bg(Colors::BG_GAUGE))
        .percent(analysis.gauge_percent())
        .label(format_percent(analysis.margin_percent));
    f.render_widget(gauge, chunks[1]);

    let mut lines = vec![Line::from("")];
    for recommendation in analysis.recommendations(&pricing, option_count) {
        let style = match recommendation {
            Recommendation::SuggestPopularOptions => Styles::title(),
            Recommendation::BelowAverageMargin => Styles::warning(),
            Recommendation::FinancingEligible(_) => Styles::success(),
        };
        lines.push(Line::from(Span::styled(
            format!("> {}", recommendation_text(&recommendation)),
            style,
        )));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[2]);
}
