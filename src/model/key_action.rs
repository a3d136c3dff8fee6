//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the timeline up by one line. Default: k/↑
    ScrollUp,
    /// Scroll the timeline down by one line. Default: j/↓
    ScrollDown,
    /// Scroll up by one page height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one page height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the top of the timeline. Default: g/Home
    ScrollToTop,
    /// Jump to the latest (bottom-most) entry. Default: G/End
    ScrollToLatest,

    // Entry focus
    /// Move focus to the next (newer) entry. Default: Tab/n
    NextEntry,
    /// Move focus to the previous (older) entry. Default: Shift+Tab/p
    PrevEntry,

    // Carousel (acts on the focused entry's carousel)
    /// Step the carousel backwards. Default: ←/h
    CarouselPrev,
    /// Step the carousel forwards. Default: →/l
    CarouselNext,
    /// Activate the carousel item at a 1-indexed position. Default: 1-9
    ActivateImage(usize),
    /// Activate the front item, i.e. open it in the overlay. Default: Enter
    OpenActive,
    /// Dismiss the current overlay. Default: Esc
    CloseOverlay,

    // Appearance
    /// Toggle between the light and dark theme. Default: t
    ToggleTheme,

    // Application
    /// Reload the document from its source. Default: r
    Reload,
    /// Show the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
