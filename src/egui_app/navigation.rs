//! Navigation
//!
//! The selector is a pure function of `is_authenticated`: signed in, only
//! [`Route::Home`] is reachable; signed out, only the sign in / sign up /
//! forgot password group, entered at [`Route::SignIn`].
//!
//! The [`Navigator`] owns the mounted screen. Switching routes drops the old
//! screen, which cancels any request it still had in flight.

use eframe::egui;

use crate::egui_app::auth::AuthStore;
use crate::egui_app::state::AppContext;
use crate::egui_app::types::Route;
use crate::egui_app::views::{ForgotPasswordView, HomeView, SignInView, SignUpView};

/// First screen of the group the selector allows
pub fn entry_route(is_authenticated: bool) -> Route {
    if is_authenticated {
        Route::Home
    } else {
        Route::SignIn
    }
}

/// Whether `route` is reachable for the given auth status
pub fn is_reachable(route: Route, is_authenticated: bool) -> bool {
    route.requires_auth() == is_authenticated
}

/// The currently mounted screen and its local state
pub enum ActiveScreen {
    SignIn(SignInView),
    SignUp(SignUpView),
    ForgotPassword(ForgotPasswordView),
    Home(HomeView),
}

impl ActiveScreen {
    pub fn mount(route: Route) -> Self {
        match route {
            Route::SignIn => ActiveScreen::SignIn(SignInView::new()),
            Route::SignUp => ActiveScreen::SignUp(SignUpView::new()),
            Route::ForgotPassword => ActiveScreen::ForgotPassword(ForgotPasswordView::new()),
            Route::Home => ActiveScreen::Home(HomeView::new()),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            ActiveScreen::SignIn(_) => Route::SignIn,
            ActiveScreen::SignUp(_) => Route::SignUp,
            ActiveScreen::ForgotPassword(_) => Route::ForgotPassword,
            ActiveScreen::Home(_) => Route::Home,
        }
    }

    pub fn is_busy(&self) -> bool {
        match self {
            ActiveScreen::SignIn(view) => view.is_busy(),
            ActiveScreen::SignUp(view) => view.is_busy(),
            ActiveScreen::ForgotPassword(view) => view.is_busy(),
            ActiveScreen::Home(_) => false,
        }
    }

    /// Deliver a finished request, if any. Returns true when one was applied.
    pub fn poll(&mut self, ctx: &mut AppContext) -> bool {
        match self {
            ActiveScreen::SignIn(view) => view.poll(ctx),
            ActiveScreen::SignUp(view) => view.poll(ctx),
            ActiveScreen::ForgotPassword(view) => view.poll(ctx),
            ActiveScreen::Home(_) => false,
        }
    }

    /// Draw the screen; returns the route it asked to navigate to.
    pub fn render(&mut self, ui: &mut egui::Ui, ctx: &mut AppContext) -> Option<Route> {
        match self {
            ActiveScreen::SignIn(view) => view.render(ui, ctx),
            ActiveScreen::SignUp(view) => view.render(ui, ctx),
            ActiveScreen::ForgotPassword(view) => view.render(ui, ctx),
            ActiveScreen::Home(view) => view.render(ui, ctx),
        }
    }

    pub fn as_sign_in_mut(&mut self) -> Option<&mut SignInView> {
        match self {
            ActiveScreen::SignIn(view) => Some(view),
            _ => None,
        }
    }

    pub fn as_sign_up_mut(&mut self) -> Option<&mut SignUpView> {
        match self {
            ActiveScreen::SignUp(view) => Some(view),
            _ => None,
        }
    }

    pub fn as_forgot_password_mut(&mut self) -> Option<&mut ForgotPasswordView> {
        match self {
            ActiveScreen::ForgotPassword(view) => Some(view),
            _ => None,
        }
    }

    pub fn as_home_mut(&mut self) -> Option<&mut HomeView> {
        match self {
            ActiveScreen::Home(view) => Some(view),
            _ => None,
        }
    }
}

/// Owner of the mounted screen, kept consistent with the auth store
pub struct Navigator {
    screen: ActiveScreen,
    authenticated: bool,
    seen_revision: u64,
}

impl Navigator {
    pub fn new(is_authenticated: bool) -> Self {
        Self {
            screen: ActiveScreen::mount(entry_route(is_authenticated)),
            authenticated: is_authenticated,
            seen_revision: 0,
        }
    }

    pub fn current(&self) -> Route {
        self.screen.route()
    }

    pub fn screen(&self) -> &ActiveScreen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut ActiveScreen {
        &mut self.screen
    }

    /// Mount `route` if the selector allows it. Navigating to the current
    /// route keeps the mounted screen as is.
    ///
    /// A screen waiting on a request is never unmounted: its outcome is what
    /// moves the store out of `Authenticating`.
    pub fn navigate_to(&mut self, route: Route) -> bool {
        if !is_reachable(route, self.authenticated) {
            tracing::warn!(
                "[NAV] {} is not reachable while {}",
                route,
                if self.authenticated { "signed in" } else { "signed out" }
            );
            return false;
        }
        if route == self.current() {
            return true;
        }
        if self.screen.is_busy() {
            tracing::warn!("[NAV] {} -> {} refused, request in flight", self.current(), route);
            return false;
        }
        tracing::info!("[NAV] {} -> {}", self.current(), route);
        self.screen = ActiveScreen::mount(route);
        true
    }

    /// Re-evaluate the selector after store changes. When the reachable group
    /// changes, the group's entry screen replaces the mounted one.
    pub fn sync(&mut self, store: &AuthStore) -> bool {
        if store.revision() == self.seen_revision {
            return false;
        }
        self.seen_revision = store.revision();

        let authenticated = store.state().is_authenticated();
        if authenticated == self.authenticated {
            return false;
        }
        self.authenticated = authenticated;

        let entry = entry_route(authenticated);
        tracing::info!("[NAV] auth changed, {} -> {}", self.current(), entry);
        self.screen = ActiveScreen::mount(entry);
        true
    }
}
