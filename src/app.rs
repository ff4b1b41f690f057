//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::auth_route::RequireAuth;
use crate::components::navbar::Navbar;
use crate::components::toasts::Toasts;
use crate::pages::categorias::CategoriasPage;
use crate::pages::divisiones::DivisionesPage;
use crate::pages::login::LoginPage;
use crate::pages::profesores::ProfesoresPage;
use crate::pages::profesores_categoria::ProfesoresCategoriaPage;
use crate::pages::profesores_programa::ProfesoresProgramaPage;
use crate::pages::programas::ProgramasPage;
use crate::pages::requisitos::RequisitosPage;
use crate::pages::tipos_requisitos_categoria::TiposRequisitosCategoriaPage;
use crate::state::auth::{self, AuthState};
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session and UI state signals, provides them via context, kicks
/// off the startup credential verification, and declares the route table.
/// The session state holder is constructed exactly once here; consumers
/// receive it by context, never through globals.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth_state = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth_state);
    provide_context(ui);

    // Startup reconciliation. Effects only run in the browser, so SSR never
    // spawns the verification task.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|state| state.dark_mode = dark);

        leptos::task::spawn_local(auth::initialize(auth_state));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/catalogo-admin.css"/>
        <Title text="Catálogo Académico"/>

        <Router>
            <Show when=move || auth_state.get().is_authenticated()>
                <Navbar/>
            </Show>
            <Toasts/>
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path="/login"/> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("divisiones")
                        view=|| view! { <RequireAuth><DivisionesPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("profesores")
                        view=|| view! { <RequireAuth><ProfesoresPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("categorias")
                        view=|| view! { <RequireAuth><CategoriasPage/></RequireAuth> }
                    />
                    <Route
                        path=(
                            StaticSegment("categorias"),
                            ParamSegment("id"),
                            StaticSegment("profesores"),
                        )
                        view=|| view! { <RequireAuth><ProfesoresCategoriaPage/></RequireAuth> }
                    />
                    <Route
                        path=(
                            StaticSegment("categorias"),
                            ParamSegment("id"),
                            StaticSegment("requisitos"),
                        )
                        view=|| view! { <RequireAuth><TiposRequisitosCategoriaPage/></RequireAuth> }
                    />
                    <Route
                        path=(
                            StaticSegment("categorias"),
                            ParamSegment("id"),
                            StaticSegment("requisitos"),
                            ParamSegment("tipoRequisitoId"),
                        )
                        view=|| view! { <RequireAuth><RequisitosPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("programas"), ParamSegment("id"))
                        view=|| view! { <RequireAuth><ProgramasPage/></RequireAuth> }
                    />
                    <Route
                        path=(
                            StaticSegment("programas"),
                            ParamSegment("id"),
                            StaticSegment("profesores"),
                        )
                        view=|| view! { <RequireAuth><ProfesoresProgramaPage/></RequireAuth> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
