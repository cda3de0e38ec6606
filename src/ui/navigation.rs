//! Navigation plumbing for the router
//!
//! - [`NavigationGate`] runs the navigation guard on every location change and
//!   only renders the routed view once the guard lets it through.
//! - [`RoutedPage`] renders the view the route table maps the location to.
//! - [`ScrollManager`] applies the scroll restoration policy after navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::core::{Decision, NavigationGuard, RouteTable};
use crate::ui::auth::{AuthContext, use_auth_context};
use crate::ui::pages::{NotFoundPage, page_view};

/// Guard wrapper around the routed content
///
/// Views the flag could redirect away from are not rendered until the flag
/// has been read in the browser. A redirect replaces the current history
/// entry instead of adding one.
#[component]
pub fn NavigationGate(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth_context();
    let location = use_location();
    let guard = NavigationGuard::new(RouteTable::application(), auth.provider());

    let decision = Memo::new(move |_| {
        let href = format!("{}{}", location.pathname.get(), location.hash.get());
        // Flag changes made by sign-in/sign-out re-run the guard
        let _ = auth.authenticated.get();
        gate_decision(&guard, auth, &href)
    });

    Effect::new(move |_| {
        if let Some(target) = decision.get().and_then(|d| d.redirect_target()) {
            leptos::logging::log!(
                "navigation to {} redirected to {}",
                location.pathname.get_untracked(),
                target
            );
            let navigate = use_navigate();
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
        // Keep header state in step with the flag the guard just read
        if decision.get().is_some() && auth.ready.get_untracked() {
            auth.refresh();
        }
    });

    let allowed = move || renders_routed_view(decision.get());

    view! {
        <Show
            when=allowed
            fallback=|| view! { <div class="min-h-[60vh]" aria-busy="true"></div> }
        >
            {children()}
        </Show>
    }
}

/// Decision the gate commits for `href`
///
/// Before the flag has been read (server render, hydration) only decisions
/// that do not depend on it are committed; `None` means wait.
fn gate_decision(guard: &NavigationGuard<'_>, auth: AuthContext, href: &str) -> Option<Decision> {
    if auth.ready.get() {
        Some(guard.resolve_path(href))
    } else {
        guard.resolve_path_auth_independent(href)
    }
}

fn renders_routed_view(decision: Option<Decision>) -> bool {
    matches!(decision, Some(Decision::Proceed | Decision::NotFound))
}

/// View for the current location according to the route table
#[component]
pub fn RoutedPage() -> impl IntoView {
    let location = use_location();

    move || match RouteTable::application().find(&location.pathname.get()) {
        Some(route) => page_view(route.view),
        None => view! { <NotFoundPage /> }.into_any(),
    }
}

/// Applies the scroll policy after each navigation
///
/// Positions are recorded per path while the user scrolls and restored only
/// for history (back/forward) navigation.
#[component]
pub fn ScrollManager() -> impl IntoView {
    install_scroll_restoration();
}

#[cfg(feature = "ssr")]
fn install_scroll_restoration() {}

#[cfg(not(feature = "ssr"))]
fn install_scroll_restoration() {
    use std::cell::Cell;
    use std::rc::Rc;

    use leptos::web_sys;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::core::{ScrollHistory, ScrollPosition, ScrollTarget, resolve_scroll};

    let location = use_location();
    let history = StoredValue::new(ScrollHistory::new());
    let current_path = StoredValue::new(String::new());
    let popped = Rc::new(Cell::new(false));

    if let Some(window) = web_sys::window() {
        let on_scroll = Closure::<dyn Fn()>::new(move || {
            if let Some(window) = web_sys::window() {
                let position = ScrollPosition::new(
                    window.scroll_x().unwrap_or_default(),
                    window.scroll_y().unwrap_or_default(),
                );
                let path = current_path.get_value();
                history.update_value(|h| h.save(path, position));
            }
        });
        let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        // Keep the closure alive
        on_scroll.forget();

        let popped_flag = popped.clone();
        let on_popstate = Closure::<dyn Fn()>::new(move || popped_flag.set(true));
        let _ = window
            .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
        on_popstate.forget();
    }

    Effect::new(move |_| {
        let path = location.pathname.get();
        let hash = location.hash.get();

        let saved = if popped.replace(false) {
            history.with_value(|h| h.get(&path))
        } else {
            None
        };
        current_path.set_value(path);

        let target = resolve_scroll(saved, Some(hash.as_str()));

        // Wait a frame so the new view is in the DOM
        request_animation_frame(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            match target {
                ScrollTarget::Restore(position) => {
                    window.scroll_to_with_x_and_y(position.x, position.y);
                }
                ScrollTarget::Element { id, smooth } => {
                    let element = window
                        .document()
                        .and_then(|document| document.get_element_by_id(&id));
                    match element {
                        Some(element) => {
                            let options = web_sys::ScrollIntoViewOptions::new();
                            options.set_behavior(scroll_behavior(smooth));
                            element.scroll_into_view_with_scroll_into_view_options(&options);
                        }
                        None => {
                            leptos::logging::warn!("scroll target #{} not found", id);
                            scroll_to_top(&window, smooth);
                        }
                    }
                }
                ScrollTarget::Top { smooth } => scroll_to_top(&window, smooth),
            }
        });
    });

    fn scroll_behavior(smooth: bool) -> web_sys::ScrollBehavior {
        if smooth {
            web_sys::ScrollBehavior::Smooth
        } else {
            web_sys::ScrollBehavior::Auto
        }
    }

    fn scroll_to_top(window: &web_sys::Window, smooth: bool) {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_left(0.0);
        options.set_behavior(scroll_behavior(smooth));
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::ui::auth::provide_auth_context_with;

    #[test]
    fn test_guarded_pages_wait_for_the_flag() {
        let owner = Owner::new();
        owner.with(|| {
            let auth = provide_auth_context_with(Arc::new(|| true));
            let guard = NavigationGuard::new(RouteTable::application(), auth.provider());

            assert!(!auth.ready.get_untracked());
            assert_eq!(gate_decision(&guard, auth, "/dashboard"), None);
            assert_eq!(gate_decision(&guard, auth, "/login"), None);
            assert!(!renders_routed_view(gate_decision(&guard, auth, "/dashboard")));

            // Public and unknown pages render before the flag is known
            assert_eq!(
                gate_decision(&guard, auth, "/faq#billing"),
                Some(Decision::Proceed)
            );
            assert_eq!(
                gate_decision(&guard, auth, "/missing"),
                Some(Decision::NotFound)
            );
            assert!(renders_routed_view(gate_decision(&guard, auth, "/missing")));
        });
    }

    #[test]
    fn test_anonymous_visitor_redirected_once_ready() {
        let owner = Owner::new();
        owner.with(|| {
            let flag = Arc::new(AtomicBool::new(false));
            let reader = flag.clone();
            let auth = provide_auth_context_with(Arc::new(move || reader.load(Ordering::SeqCst)));
            let guard = NavigationGuard::new(RouteTable::application(), auth.provider());

            auth.refresh();
            let decision = gate_decision(&guard, auth, "/dashboard");
            assert_eq!(decision, Some(Decision::redirect_to_login()));
            assert_eq!(decision.and_then(|d| d.redirect_target()), Some("/login"));
            assert!(!renders_routed_view(decision));

            // Signing in flips the same gate without rebuilding the guard
            flag.store(true, Ordering::SeqCst);
            auth.refresh();
            assert_eq!(
                gate_decision(&guard, auth, "/dashboard"),
                Some(Decision::Proceed)
            );
            assert_eq!(
                gate_decision(&guard, auth, "/signup").and_then(|d| d.redirect_target()),
                Some("/dashboard")
            );
        });
    }
}
