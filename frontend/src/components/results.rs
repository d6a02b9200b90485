//! Classification results: echoed image name and the results table.

use leptos::*;

use crate::state::WidgetState;

#[component]
pub fn ResultsTable(state: RwSignal<WidgetState>) -> impl IntoView {
    view! {
        <p id="image_name">{move || state.with(|s| s.image_name().to_string())}</p>

        // Hidden until the first result is revealed
        <div
            class="table-container"
            style:display=move || {
                if state.with(|s| s.results_visible()) { "block" } else { "none" }
            }
        >
            <table id="result_table">
                <thead>
                    <tr>
                        <th>"Class"</th>
                        <th>"Probability"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || state.with(|s| {
                        s.rows()
                            .iter()
                            .map(|row| view! {
                                <tr>
                                    <td>{row.label.clone()}</td>
                                    <td>{row.value.clone()}</td>
                                </tr>
                            })
                            .collect_view()
                    })}
                </tbody>
            </table>
        </div>
    }
}
