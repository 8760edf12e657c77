//! Prediction result table.

use leptos::*;

use crate::types::InferenceResult;

#[component]
pub fn ResultTable(result: InferenceResult) -> impl IntoView {
    let percent = result.confidence_percent();

    view! {
        <div class="detail">
            <table class="result-table" aria-label="prediction result">
                <thead>
                    <tr>
                        <th class="table-cell-head">"Label:"</th>
                        <th class="table-cell-head align-right">"Confidence:"</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <th scope="row" class="table-cell">{result.label}</th>
                        <td class="table-cell align-right">{percent} "%"</td>
                    </tr>
                </tbody>
            </table>
            <p class="table-cell solution">
                <b>"Solution:"</b> " " {result.solution}
            </p>
        </div>
    }
}
