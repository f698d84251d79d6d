use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::components::toast::ToastHost;
use crate::shared::config::ConfigProvider;
use crate::shared::theme::ThemeProvider;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Config first: the API base URL is needed by everything below.
    view! {
        <ConfigProvider>
            <ToastHost>
                <AuthProvider>
                    <ThemeProvider>
                        <AppRoutes />
                    </ThemeProvider>
                </AuthProvider>
            </ToastHost>
        </ConfigProvider>
    }
}
