//! Application delegate: owns the shell and wires AppKit events to it.

use std::cell::RefCell;

use mdug_core::config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WindowConfig};
use mdug_core::launch::Launch;
use mdug_core::logging::LoggingGuard;
use mdug_core::renderer::RendererScript;
use mdug_core::surface::SystemLauncher;
use mdug_core::Shell;
use objc2::rc::Retained;
use objc2::runtime::{AnyObject, ProtocolObject};
use objc2::{DefinedClass, MainThreadOnly, define_class, msg_send, sel};
use objc2_app_kit::{
    NSApplication, NSApplicationActivationPolicy, NSApplicationDelegate, NSBackingStoreType,
    NSButton, NSWindow, NSWindowDelegate, NSWindowStyleMask,
};
use objc2_foundation::{
    MainThreadMarker, NSNotification, NSObject, NSObjectProtocol, NSPoint, NSRect, NSSize, ns_string,
};

use crate::keyboard::install_quit_monitor;
use crate::surface::{NativeWindow, WebViewSurface};
use crate::titlebar::add_editor_button;

pub type ViewerShell = Shell<WebViewSurface, NativeWindow, SystemLauncher>;

/// State owned by the delegate. The shell exists once the application has
/// finished launching; until then the file to open waits in `launch`.
struct AppDelegateIvars {
    launch: RefCell<Option<Launch>>,
    logging: RefCell<Option<LoggingGuard>>,
    window: RefCell<Option<Retained<NSWindow>>>,
    editor_button: RefCell<Option<Retained<NSButton>>>,
    key_monitor: RefCell<Option<Retained<AnyObject>>>,
    shell: RefCell<Option<ViewerShell>>,
}

define_class!(
    // SAFETY: NSObject has no subclassing requirements and the delegate is
    // only used on the main thread.
    #[unsafe(super = NSObject)]
    #[thread_kind = MainThreadOnly]
    #[ivars = AppDelegateIvars]
    #[name = "MarkdugAppDelegate"]
    struct AppDelegate;

    impl AppDelegate {
        #[unsafe(method(openInEditor:))]
        fn open_in_editor(&self, _sender: Option<&AnyObject>) {
            if let Some(shell) = self.ivars().shell.borrow_mut().as_mut() {
                shell.open_in_external_editor();
            }
        }
    }

    unsafe impl NSObjectProtocol for AppDelegate {}

    unsafe impl NSApplicationDelegate for AppDelegate {
        #[unsafe(method(applicationDidFinishLaunching:))]
        fn application_did_finish_launching(&self, _notification: &NSNotification) {
            let mtm = MainThreadMarker::from(self);
            self.open_window(mtm);
        }

        #[unsafe(method(applicationWillTerminate:))]
        fn application_will_terminate(&self, _notification: &NSNotification) {
            tracing::info!("terminating");
            // Flushes the log writer; AppKit exits without unwinding `main`.
            self.ivars().logging.borrow_mut().take();
        }
    }

    unsafe impl NSWindowDelegate for AppDelegate {
        #[unsafe(method(windowWillClose:))]
        fn window_will_close(&self, _notification: &NSNotification) {
            let mtm = MainThreadMarker::from(self);
            // SAFETY: called on the main thread with no sender.
            unsafe { NSApplication::sharedApplication(mtm).terminate(None) };
        }
    }
);

impl AppDelegate {
    fn new(mtm: MainThreadMarker, launch: Launch, logging: Option<LoggingGuard>) -> Retained<Self> {
        let this = mtm.alloc::<Self>().set_ivars(AppDelegateIvars {
            launch: RefCell::new(Some(launch)),
            logging: RefCell::new(logging),
            window: RefCell::new(None),
            editor_button: RefCell::new(None),
            key_monitor: RefCell::new(None),
            shell: RefCell::new(None),
        });
        unsafe { msg_send![super(this), init] }
    }

    /// Creates the window, web view, title-bar button and key monitor, then
    /// hands the command-line file to the shell.
    fn open_window(&self, mtm: MainThreadMarker) {
        let Some(launch) = self.ivars().launch.borrow_mut().take() else {
            return;
        };

        let window = create_window(mtm, &launch.config.window);
        let delegate: &ProtocolObject<dyn NSWindowDelegate> = ProtocolObject::from_ref(self);
        window.setDelegate(Some(delegate));

        let surface = WebViewSurface::attach(mtm, &window);

        let target: &AnyObject = self;
        let button = add_editor_button(mtm, &window, target, sel!(openInEditor:));
        if button.is_none() {
            tracing::warn!("window has no title bar, editor button not shown");
        }

        let monitor = install_quit_monitor();
        if monitor.is_none() {
            tracing::warn!("key monitor not installed");
        }

        let renderer = RendererScript::load(&launch.resource_dir);
        tracing::info!(bundled = renderer.is_bundled(), "renderer loaded");
        let mut shell = Shell::new(
            surface,
            NativeWindow::new(window.clone()),
            SystemLauncher,
            renderer,
        );
        shell.initialize(launch.file.as_deref());

        window.makeKeyAndOrderFront(None);
        NSApplication::sharedApplication(mtm).activate();

        *self.ivars().window.borrow_mut() = Some(window);
        *self.ivars().editor_button.borrow_mut() = button;
        *self.ivars().key_monitor.borrow_mut() = monitor;
        *self.ivars().shell.borrow_mut() = Some(shell);
    }
}

fn create_window(mtm: MainThreadMarker, config: &WindowConfig) -> Retained<NSWindow> {
    let content_rect = NSRect::new(
        NSPoint::new(0.0, 0.0),
        NSSize::new(f64::from(config.width), f64::from(config.height)),
    );
    let style = NSWindowStyleMask::Titled
        | NSWindowStyleMask::Closable
        | NSWindowStyleMask::Resizable
        | NSWindowStyleMask::Miniaturizable;

    // SAFETY: a new window on the main thread; it is kept alive by the
    // delegate, so AppKit must not release it on close.
    let window = unsafe {
        let window = NSWindow::initWithContentRect_styleMask_backing_defer(
            mtm.alloc::<NSWindow>(),
            content_rect,
            style,
            NSBackingStoreType::Buffered,
            false,
        );
        window.setReleasedWhenClosed(false);
        window
    };
    window.setTitle(ns_string!("Markdug"));
    window.setContentMinSize(NSSize::new(
        f64::from(MIN_WINDOW_WIDTH),
        f64::from(MIN_WINDOW_HEIGHT),
    ));
    window.center();
    window
}

/// Runs the application until it terminates.
pub fn run(mtm: MainThreadMarker, launch: Launch, logging: Option<LoggingGuard>) {
    let app = NSApplication::sharedApplication(mtm);
    app.setActivationPolicy(NSApplicationActivationPolicy::Regular);

    let delegate = AppDelegate::new(mtm, launch, logging);
    let delegate_obj: &ProtocolObject<dyn NSApplicationDelegate> = ProtocolObject::from_ref(&*delegate);
    app.setDelegate(Some(delegate_obj));
    app.run();
}
