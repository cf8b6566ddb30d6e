use contracts::dashboards::d401_reports::ChartSeries;
use leptos::prelude::*;

/// Horizontal bar chart drawn with plain CSS widths.
#[component]
pub fn BarChart(
    series: ChartSeries,
    /// Extra line under the bars, e.g. a count kept out of the series
    #[prop(optional, into)]
    footnote: Option<String>,
) -> impl IntoView {
    let rows = series
        .points
        .iter()
        .map(|point| {
            let width = format!("{:.1}%", series.share(point));
            view! {
                <div class="bar-chart__row">
                    <span class="bar-chart__label" title=point.label.clone()>{point.label.clone()}</span>
                    <div class="bar-chart__track">
                        <div class="bar-chart__bar" style:width=width></div>
                    </div>
                    <span class="bar-chart__value">{point.value}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="card bar-chart">
            <div class="bar-chart__header">
                <h3 class="card__title">{series.title.clone()}</h3>
                <span class="bar-chart__total">{format!("Total: {}", series.total())}</span>
            </div>
            {if series.points.is_empty() {
                view! { <div class="bar-chart__empty">"No data"</div> }.into_any()
            } else {
                rows.into_any()
            }}
            {footnote.map(|text| view! { <div class="bar-chart__footnote">{text}</div> })}
        </div>
    }
}
