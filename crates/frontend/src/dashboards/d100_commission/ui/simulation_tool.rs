use contracts::dashboards::d100_commission::simulator::{parse_input, SimulationResult};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::card_animated::CardAnimated;
use crate::shared::display::use_display;
use crate::shared::i18n::use_i18n;

/// "What if" calculator: extra sales at an average value, 7% commission
#[component]
pub fn SimulationTool(current_commission: f64, currency: String) -> impl IntoView {
    let i18n = use_i18n();
    let display = use_display();

    let sales_count = RwSignal::new("1".to_string());
    let avg_sale_value = RwSignal::new("5000".to_string());
    let result = RwSignal::new(None::<SimulationResult>);

    let calculate = move |_| {
        let computed = SimulationResult::compute(
            current_commission,
            parse_input(&sales_count.get_untracked()),
            parse_input(&avg_sale_value.get_untracked()),
        );
        result.set(Some(computed));
    };

    let result_view = move || {
        result.get().map(|r| {
            view! {
                <div class="simulator__result">
                    <p>
                        {i18n.t().if_you_close} " "
                        <strong>{display.integer(r.sales_count)}</strong>
                        " " {i18n.t().more_sales} " " {i18n.t().at} " "
                        <strong>{display.money(&currency, r.avg_sale_value)}</strong>
                        " " {i18n.t().each}
                    </p>
                    <div class="simulator__row">
                        <span>{i18n.t().additional_earnings}</span>
                        <strong class="text-success">
                            {format!("+{}", display.money(&currency, r.additional_earnings))}
                        </strong>
                    </div>
                    <div class="simulator__row">
                        <span>{i18n.t().total_potential}</span>
                        <strong>{display.money(&currency, r.total_potential)}</strong>
                    </div>
                </div>
            }
        })
    };

    view! {
        <CardAnimated delay_ms=280 accent="primary">
            <div class="simulator">
                <div class="card-header">
                    <h3>{move || i18n.t().commission_simulator}</h3>
                </div>
                <Flex vertical=true gap=FlexGap::Medium>
                    <label class="simulator__field">
                        <span>{move || i18n.t().number_of_sales}</span>
                        <Input input_type=InputType::Number value=sales_count />
                    </label>
                    <label class="simulator__field">
                        <span>{move || i18n.t().avg_sale_value}</span>
                        <Input input_type=InputType::Number value=avg_sale_value />
                    </label>
                    <Button appearance=ButtonAppearance::Primary on_click=calculate>
                        {move || i18n.t().calculate_earnings}
                    </Button>
                </Flex>
                {result_view}
            </div>
        </CardAnimated>
    }
}
