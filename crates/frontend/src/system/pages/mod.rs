pub mod change_password;
pub mod forgot_password;
pub mod login;
pub mod reset_password;

use leptos::prelude::*;

/// Centered card used by the signed-out pages.
#[component]
pub fn AuthCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Shop Back Office"</h1>
                <h2>{title}</h2>
                {children()}
            </div>
        </div>
    }
}
