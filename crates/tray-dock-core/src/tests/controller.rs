use crate::tests::{FakeHost, HostOp};
use crate::{ActivationPolicy, ActivationReason, TrayController};

fn controller() -> TrayController {
    TrayController::new(ActivationPolicy::hide_allowed())
}

/// WHAT: A second hide_all in a row changes nothing
/// WHY: Hide must be idempotent once the application is minimized to tray
#[test]
fn given_minimized_to_tray_when_hide_all_again_then_noop() {
    // Given: Two visible windows, already hidden once
    let mut host = FakeHost::new();
    host.add_window(true, false);
    host.add_window(true, false);
    let mut controller = controller();
    controller.hide_all(&mut host);
    let ops_after_first = host.ops.len();

    // When: Hiding again
    controller.hide_all(&mut host);

    // Then: No further host calls, still minimized to tray
    assert_eq!(host.ops.len(), ops_after_first);
    assert!(controller.is_minimized_to_tray());
}

/// WHAT: hide_all followed by show_all restores pre-hide visibility exactly
/// WHY: Snapshot fidelity is the core restore guarantee
#[test]
#[allow(clippy::unwrap_used)]
fn given_mixed_visibility_when_hide_then_show_then_prehide_state_restored() {
    // Given: A visible window, a hidden window and a minimized one
    let mut host = FakeHost::new();
    let visible = host.add_window(true, false);
    let hidden = host.add_window(false, false);
    let minimized = host.add_window(true, true);
    let mut controller = controller();

    // When: Hiding everything and showing it again
    controller.hide_all(&mut host);
    assert!(!host.window(visible).unwrap().visible);
    assert!(!host.window(minimized).unwrap().visible);
    controller.show_all(&mut host);

    // Then: Each window is back in its pre-hide state
    assert!(host.window(visible).unwrap().visible);
    assert!(!host.window(hidden).unwrap().visible);
    assert!(host.window(minimized).unwrap().visible);
    assert!(!host.window(minimized).unwrap().minimized);
    assert!(!controller.is_minimized_to_tray());
}

/// WHAT: A window the host opened while minimized is re-hidden on show_all
/// WHY: Snapshot reconciliation corrects host-side drift, not just our own hides
#[test]
#[allow(clippy::unwrap_used)]
fn given_host_opened_window_while_minimized_when_show_all_then_reconciled() {
    // Given: A hidden window recorded as hidden in the snapshot
    let mut host = FakeHost::new();
    host.add_window(true, false);
    let hidden = host.add_window(false, false);
    let mut controller = controller();
    controller.hide_all(&mut host);

    // When: The host shows it while we are minimized, then we restore
    host.set_visible(hidden, true);
    controller.show_all(&mut host);

    // Then: The window is back to its recorded pre-hide state
    assert!(!host.window(hidden).unwrap().visible);
}

/// WHAT: show_all activates the window that last held focus
/// WHY: Restoration should hand focus back where the user left it
#[test]
fn given_focus_events_when_show_all_then_last_focused_window_activated() {
    // Given: Focus moved across two windows, then the app lost focus
    let mut host = FakeHost::new();
    let first = host.add_window(true, false);
    let second = host.add_window(true, false);
    let mut controller = controller();
    controller.on_focus_changed(None, Some(first));
    controller.on_focus_changed(Some(first), Some(second));
    controller.on_focus_changed(Some(second), None);

    // When: Hiding and restoring
    controller.hide_all(&mut host);
    controller.show_all(&mut host);

    // Then: The last focused window received the final activation
    assert_eq!(controller.last_focused(), Some(second));
    assert_eq!(host.ops.last(), Some(&HostOp::Focus(second)));
}

/// WHAT: Primary tray click hides when focused with nothing minimized
/// WHY: Tray click toggles; the hide branch fires when no show condition holds
#[test]
#[allow(clippy::unwrap_used)]
fn given_focused_app_when_tray_clicked_then_windows_hidden() {
    // Given: A focused application with one visible window
    let mut host = FakeHost::new();
    let window = host.add_window(true, false);
    let mut controller = controller();
    controller.on_focus_changed(None, Some(window));

    // When: The tray icon is clicked
    controller.on_activated(&mut host, ActivationReason::Primary);

    // Then: The window set is hidden
    assert!(controller.is_minimized_to_tray());
    assert!(!host.window(window).unwrap().visible);
}

/// WHAT: Primary tray click shows when minimized to tray
/// WHY: Decision table row (focused=true, minimized-window=false, tray=true)
#[test]
#[allow(clippy::unwrap_used)]
fn given_minimized_to_tray_when_tray_clicked_then_windows_shown() {
    // Given: A hidden-to-tray application
    let mut host = FakeHost::new();
    let window = host.add_window(true, false);
    let mut controller = controller();
    controller.on_focus_changed(None, Some(window));
    controller.hide_all(&mut host);

    // When: The tray icon is clicked
    controller.on_activated(&mut host, ActivationReason::Primary);

    // Then: The window set is restored
    assert!(!controller.is_minimized_to_tray());
    assert!(host.window(window).unwrap().visible);
}

/// WHAT: Primary tray click shows when a visible window is minimized
/// WHY: Decision table row (focused=true, minimized-window=true, tray=false)
#[test]
#[allow(clippy::unwrap_used)]
fn given_minimized_window_when_tray_clicked_then_windows_shown() {
    // Given: A focused app whose only window sits minimized in the taskbar
    let mut host = FakeHost::new();
    let window = host.add_window(true, true);
    let mut controller = controller();
    controller.on_focus_changed(None, Some(window));

    // When: The tray icon is clicked
    controller.on_activated(&mut host, ActivationReason::Primary);

    // Then: The window is restored, not hidden
    assert!(!controller.is_minimized_to_tray());
    assert!(!host.window(window).unwrap().minimized);
    assert!(host.window(window).unwrap().visible);
}

/// WHAT: Primary tray click shows when the application is not focused
/// WHY: An unfocused app gets raised instead of hidden
#[test]
#[allow(clippy::unwrap_used)]
fn given_unfocused_app_when_tray_clicked_then_windows_shown() {
    // Given: The application lost focus to another program
    let mut host = FakeHost::new();
    let window = host.add_window(true, false);
    let mut controller = controller();
    controller.on_focus_changed(None, Some(window));
    controller.on_focus_changed(Some(window), None);

    // When: The tray icon is clicked
    controller.on_activated(&mut host, ActivationReason::Primary);

    // Then: The windows are raised, nothing is hidden
    assert!(!controller.is_minimized_to_tray());
    assert!(host.window(window).unwrap().visible);
}

/// WHAT: Hide-suppressing policy leaves windows unchanged on tray click
/// WHY: On platforms with stale focus at click time the hide branch must not fire
#[test]
fn given_suppressing_policy_when_no_show_condition_then_windows_unchanged() {
    // Given: A focused app under the hide-suppressed policy
    let mut host = FakeHost::new();
    let window = host.add_window(true, false);
    let mut controller = TrayController::new(ActivationPolicy::hide_suppressed());
    controller.on_focus_changed(None, Some(window));

    // When: The tray icon is clicked
    controller.on_activated(&mut host, ActivationReason::Primary);

    // Then: No host call was made at all
    assert!(host.ops.is_empty());
    assert!(!controller.is_minimized_to_tray());
}

/// WHAT: Hide-suppressing policy still shows when a show condition holds
/// WHY: Suppression only removes the hide branch, never the show branch
#[test]
#[allow(clippy::unwrap_used)]
fn given_suppressing_policy_when_minimized_to_tray_then_tray_click_shows() {
    // Given: A hidden-to-tray application under the hide-suppressed policy
    let mut host = FakeHost::new();
    let window = host.add_window(true, false);
    let mut controller = TrayController::new(ActivationPolicy::hide_suppressed());
    controller.hide_all(&mut host);

    // When: The tray icon is clicked
    controller.on_activated(&mut host, ActivationReason::Primary);

    // Then: The window set is restored
    assert!(!controller.is_minimized_to_tray());
    assert!(host.window(window).unwrap().visible);
}

/// WHAT: Non-primary activations are ignored
/// WHY: Context-menu and hover events must not toggle visibility
#[test]
fn given_context_activation_when_tray_activated_then_ignored() {
    // Given: A focused app with a visible window
    let mut host = FakeHost::new();
    host.add_window(true, false);
    let mut controller = controller();

    // When: Context and other activations arrive
    controller.on_activated(&mut host, ActivationReason::Context);
    controller.on_activated(&mut host, ActivationReason::Other);

    // Then: Nothing happened
    assert!(host.ops.is_empty());
    assert!(!controller.is_minimized_to_tray());
}

/// WHAT: A window destroyed between hide and show is skipped silently
/// WHY: Stale handles must never break restoration
#[test]
#[allow(clippy::unwrap_used)]
fn given_destroyed_window_when_show_all_then_completes_without_it() {
    // Given: Two windows hidden to tray, one destroyed meanwhile
    let mut host = FakeHost::new();
    let doomed = host.add_window(true, false);
    let survivor = host.add_window(true, false);
    let mut controller = controller();
    controller.on_focus_changed(None, Some(doomed));
    controller.hide_all(&mut host);
    host.destroy(doomed);

    // When: Restoring
    controller.show_all(&mut host);

    // Then: The survivor is back, the destroyed window saw only its hide
    assert!(host.window(survivor).unwrap().visible);
    assert_eq!(host.ops_for(doomed), vec![HostOp::Hide(doomed)]);
    assert!(!controller.is_minimized_to_tray());
    assert_eq!(controller.last_focused(), None);
}

/// WHAT: Contentless windows are excluded from every enumeration
/// WHY: Host-internal artifact windows must not be hidden or restored
#[test]
#[allow(clippy::unwrap_used)]
fn given_contentless_window_when_hide_all_then_excluded() {
    // Given: A content window and a visible artifact window
    let mut host = FakeHost::new();
    let window = host.add_window(true, false);
    let artifact = host.add_artifact(true);
    let mut controller = controller();

    // When: Hiding everything
    controller.hide_all(&mut host);

    // Then: Only the content window was touched
    assert!(!host.window(window).unwrap().visible);
    assert!(host.window(artifact).unwrap().visible);
    assert!(host.ops_for(artifact).is_empty());
}

/// WHAT: A hidden non-minimized window is restored via hide-then-show
/// WHY: The double toggle is what wins stacking races against foreign windows
#[test]
fn given_hidden_window_when_show_all_then_double_toggle_applied() {
    // Given: One visible window, hidden to tray
    let mut host = FakeHost::new();
    let window = host.add_window(true, false);
    let mut controller = controller();
    controller.hide_all(&mut host);

    // When: Restoring
    controller.show_all(&mut host);

    // Then: The restore sequence is hide, show, raise
    assert_eq!(
        host.ops_for(window),
        vec![
            HostOp::Hide(window),
            HostOp::Hide(window),
            HostOp::Show(window),
            HostOp::Raise(window),
        ]
    );
}

/// WHAT: show_all without a preceding hide raises only the visible set
/// WHY: Covers showing after focus loss; hidden windows must stay hidden
#[test]
#[allow(clippy::unwrap_used)]
fn given_not_minimized_when_show_all_then_only_visible_windows_raised() {
    // Given: A visible and a hidden window, nothing minimized to tray
    let mut host = FakeHost::new();
    let visible = host.add_window(true, false);
    let hidden = host.add_window(false, false);
    let mut controller = controller();

    // When: Showing without a prior hide
    controller.show_all(&mut host);

    // Then: Only the visible window was raised, the hidden one untouched
    assert!(!host.ops_for(visible).is_empty());
    assert!(host.ops_for(hidden).is_empty());
    assert!(!host.window(hidden).unwrap().visible);
    assert!(!controller.is_minimized_to_tray());
}

/// WHAT: The hotkey toggle alternates between hide and show
/// WHY: One binding drives both directions of the transition
#[test]
#[allow(clippy::unwrap_used)]
fn given_visible_windows_when_toggled_twice_then_hidden_then_shown() {
    // Given: A visible window
    let mut host = FakeHost::new();
    let window = host.add_window(true, false);
    let mut controller = controller();

    // When/Then: First toggle hides
    controller.toggle(&mut host);
    assert!(controller.is_minimized_to_tray());
    assert!(!host.window(window).unwrap().visible);

    // When/Then: Second toggle restores
    controller.toggle(&mut host);
    assert!(!controller.is_minimized_to_tray());
    assert!(host.window(window).unwrap().visible);
}
