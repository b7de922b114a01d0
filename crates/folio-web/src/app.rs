use crate::constants::*;
use crate::dom;
use crate::events::ListenerSet;
use crate::frame::FrameLoop;
use crate::hover::HoverBindings;
use crate::input;
use crate::render::{self, CursorSink, LoaderSink};
use folio_core::{
    CursorFrame, Driver, FillFrame, LoaderFrame, LoaderPhase, LoadingProgress, LogoRotation,
    MagneticFill, MagneticFrame, MagneticPull, RotationState, StickyCursor,
};
use wasm_bindgen::JsCast;
use web_sys as web;

struct CursorMount {
    sink: CursorSink,
    driver: Driver<StickyCursor>,
}

struct LogoMount {
    el: web::HtmlElement,
    driver: Driver<LogoRotation>,
}

struct MagnetMount {
    el: web::HtmlElement,
    driver: Driver<MagneticPull>,
    // `[data-magnetic-bg]` child, when the button has one
    bg: Option<web::HtmlElement>,
    fill: Driver<MagneticFill>,
}

impl MagnetMount {
    fn new(el: web::HtmlElement) -> Self {
        let bg = dom::query_in(&el, MAGNETIC_BG_SELECTOR);
        let mut driver = Driver::new(MagneticPull::default());
        let mut fill = Driver::new(MagneticFill::default());
        driver.start();
        fill.start();
        Self {
            el,
            driver,
            bg,
            fill,
        }
    }

    fn stop(&mut self) {
        self.driver.stop();
        self.fill.stop();
    }

    /// Drop every inline style this mount wrote.
    fn clear(&self) {
        render::clear_transform(&self.el);
        if let Some(bg) = &self.bg {
            render::clear_fill(bg);
        }
    }
}

struct LoaderMount {
    sink: LoaderSink,
    driver: Driver<LoadingProgress>,
}

/// Everything mounted on the current page. Each visual element owns exactly
/// one driver; dropping the app detaches all listeners.
pub struct App {
    window: web::Window,
    document: web::Document,
    cursor: Option<CursorMount>,
    logo: Option<LogoMount>,
    magnets: Vec<MagnetMount>,
    loader: Option<LoaderMount>,
    hover: HoverBindings,
    listeners: ListenerSet,
    magnet_listeners: ListenerSet,
    frames: FrameLoop,
}

fn mount_cursor(window: &web::Window, document: &web::Document) -> Option<CursorMount> {
    let dot = dom::html_by_id(document, CURSOR_DOT_ID);
    let ring = dom::html_by_id(document, CURSOR_RING_ID);
    let (dot, ring) = match (dot, ring) {
        (Some(d), Some(r)) => (d, r),
        _ => {
            log::warn!("[cursor] #{} / #{} missing; cursor disabled", CURSOR_DOT_ID, CURSOR_RING_ID);
            return None;
        }
    };
    let sink = CursorSink { dot, ring };
    if dom::is_mobile(window) {
        log::info!("[cursor] coarse or narrow device; using the native cursor");
        sink.hide();
        return None;
    }
    Some(CursorMount {
        sink,
        driver: Driver::new(StickyCursor::default()),
    })
}

fn mount_loader(document: &web::Document) -> Option<LoaderMount> {
    let screen = dom::html_by_id(document, LOADER_ID)?;
    let sink = LoaderSink {
        screen,
        percent: dom::html_by_id(document, LOADER_PERCENT_ID),
        bar: dom::html_by_id(document, LOADER_BAR_ID),
    };
    Some(LoaderMount {
        sink,
        driver: Driver::new(LoadingProgress::new(rand::random())),
    })
}

impl App {
    pub fn mount() -> anyhow::Result<App> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let cursor = mount_cursor(&window, &document);
        let logo = dom::html_by_id(&document, LOGO_ID).map(|el| LogoMount {
            el,
            driver: Driver::new(LogoRotation::default()),
        });
        let loader = mount_loader(&document);

        let mut app = App {
            window,
            document,
            cursor,
            logo,
            magnets: Vec::new(),
            loader,
            hover: HoverBindings::default(),
            listeners: ListenerSet::default(),
            magnet_listeners: ListenerSet::default(),
            frames: FrameLoop::default(),
        };
        app.resync();
        app.wire_listeners();
        app.start();
        log::info!(
            "[mount] cursor={} logo={} magnets={} loader={} listeners={}",
            app.cursor.is_some(),
            app.logo.is_some(),
            app.magnets.len(),
            app.loader.is_some(),
            app.listeners.len()
        );
        Ok(app)
    }

    fn start(&mut self) {
        if let Some(c) = &mut self.cursor {
            c.driver.start();
        }
        if let Some(l) = &mut self.logo {
            l.driver.start();
        }
        for m in &mut self.magnets {
            m.driver.start();
            m.fill.start();
        }
        if let Some(l) = &mut self.loader {
            l.driver.start();
        }
        self.frames.start(|dt| {
            crate::with_app(|app| app.frame(dt));
        });
    }

    fn wire_listeners(&mut self) {
        let doc_target: web::EventTarget = self.document.clone().into();
        let win_target: web::EventTarget = self.window.clone().into();

        self.listeners.listen(&doc_target, "pointermove", |ev| {
            if let Some(pe) = ev.dyn_ref::<web::PointerEvent>() {
                crate::with_app(|app| app.on_pointer_move(pe));
            }
        });
        self.listeners.listen(&win_target, "pointerup", |_| {
            crate::with_app(|app| app.on_pointer_up());
        });
        self.listeners.listen(&win_target, "pointercancel", |_| {
            crate::with_app(|app| app.on_capture_lost());
        });
        self.listeners.listen(&win_target, "scroll", |ev| {
            let ts = ev.time_stamp();
            crate::with_app(|app| app.on_scroll(ts));
        });
        for kind in ["popstate", "hashchange"] {
            self.listeners.listen(&win_target, kind, |_| {
                crate::with_app(|app| app.on_navigate());
            });
        }

        if let Some(logo) = &self.logo {
            let logo_target: web::EventTarget = logo.el.clone().into();
            self.listeners.listen(&logo_target, "pointerdown", |ev| {
                if let Some(pe) = ev.dyn_ref::<web::PointerEvent>() {
                    crate::with_app(|app| app.on_logo_down(pe));
                    pe.prevent_default();
                }
            });
            self.listeners.listen(&logo_target, "lostpointercapture", |_| {
                crate::with_app(|app| app.on_capture_lost());
            });
        }
    }

    // ---------------- Input ----------------

    fn on_pointer_move(&mut self, ev: &web::PointerEvent) {
        let pos = input::pointer_client_pos(ev);
        let ts = ev.time_stamp();
        if let Some(c) = &mut self.cursor {
            c.driver.get_mut().on_pointer_move(pos.x, pos.y, ts);
        }
        if let Some(l) = &mut self.logo {
            l.driver.get_mut().pointer_move(pos.x, pos.y, ts);
        }
        for m in &mut self.magnets {
            let rect = input::element_rect(&m.el);
            m.driver.get_mut().on_pointer_move(pos, &rect);
        }
    }

    fn on_logo_down(&mut self, ev: &web::PointerEvent) {
        if let Some(l) = &mut self.logo {
            let pos = input::pointer_client_pos(ev);
            l.driver.get_mut().pointer_down(pos.x, pos.y, ev.time_stamp());
            _ = l.el.set_pointer_capture(ev.pointer_id());
        }
    }

    fn on_pointer_up(&mut self) {
        if let Some(l) = &mut self.logo {
            l.driver.get_mut().pointer_up();
        }
    }

    fn on_capture_lost(&mut self) {
        if let Some(l) = &mut self.logo {
            l.driver.get_mut().capture_lost();
        }
    }

    fn on_scroll(&mut self, ts: f64) {
        let y = input::scroll_y(&self.window);
        if let Some(l) = &mut self.logo {
            l.driver.get_mut().on_scroll(y, ts);
        }
    }

    pub fn on_navigate(&mut self) {
        if let Some(c) = &mut self.cursor {
            c.driver.get_mut().on_navigate();
        }
        self.resync();
    }

    pub fn hover_enter(&mut self, id: folio_core::TargetId) {
        if let Some(c) = &mut self.cursor {
            c.driver.get_mut().on_enter(id);
        }
    }

    pub fn hover_leave(&mut self, id: folio_core::TargetId) {
        if let Some(c) = &mut self.cursor {
            c.driver.get_mut().on_leave(id);
        }
    }

    fn magnet_fill(&mut self, el: &web::HtmlElement, ev: &web::PointerEvent, entering: bool) {
        let Some(m) = self.magnets.iter_mut().find(|m| &m.el == el) else {
            return;
        };
        let pos = input::pointer_client_pos(ev);
        let rect = input::element_rect(&m.el);
        let fill = m.fill.get_mut();
        if entering {
            fill.on_enter(pos, &rect);
        } else {
            fill.on_leave(pos, &rect);
        }
    }

    pub fn hover_capture_lost(&mut self) {
        if let Some(c) = &mut self.cursor {
            c.driver.get_mut().on_capture_lost();
        }
    }

    /// Re-scan hover targets and magnetic buttons after the page changed.
    pub fn resync(&mut self) {
        if let Some(c) = &mut self.cursor {
            let ids = self.hover.rescan(&self.document);
            c.driver.get_mut().resync_targets(ids);
        }

        let mut previous = std::mem::take(&mut self.magnets);
        for el in dom::query_all(&self.document, MAGNETIC_SELECTOR) {
            let mount = match previous.iter().position(|m| m.el == el) {
                Some(i) => previous.swap_remove(i),
                None => MagnetMount::new(el),
            };
            self.magnets.push(mount);
        }
        for m in &previous {
            m.clear();
        }

        self.magnet_listeners.clear();
        for m in self.magnets.iter().filter(|m| m.bg.is_some()) {
            for (kind, entering) in [("pointerenter", true), ("pointerleave", false)] {
                let el = m.el.clone();
                self.magnet_listeners.listen(&m.el, kind, move |ev| {
                    if let Some(pe) = ev.dyn_ref::<web::PointerEvent>() {
                        crate::with_app(|app| app.magnet_fill(&el, pe, entering));
                    }
                });
            }
        }
    }

    // ---------------- Frame ----------------

    fn frame(&mut self, dt: f32) {
        let cursor: Option<CursorFrame> = self.cursor.as_mut().and_then(|c| c.driver.tick(dt));
        let logo: Option<RotationState> = self.logo.as_mut().and_then(|l| l.driver.tick(dt));
        let magnets: Vec<(Option<MagneticFrame>, Option<FillFrame>)> = self
            .magnets
            .iter_mut()
            .map(|m| (m.driver.tick(dt), m.fill.tick(dt)))
            .collect();
        let loader: Option<LoaderFrame> = self.loader.as_mut().and_then(|l| l.driver.tick(dt));

        // all state is updated; now write it out in one pass
        if let (Some(c), Some(f)) = (&self.cursor, cursor) {
            c.sink.apply(&f);
        }
        if let (Some(l), Some(r)) = (&self.logo, logo) {
            render::apply_rotation(&l.el, &r);
        }
        for (m, (pull, fill)) in self.magnets.iter().zip(magnets) {
            if let Some(f) = pull {
                render::apply_magnetic(&m.el, &f);
            }
            if let (Some(bg), Some(f)) = (&m.bg, fill) {
                render::apply_fill(bg, &f);
            }
        }
        if let (Some(l), Some(f)) = (&mut self.loader, loader) {
            l.sink.apply(&f);
            if f.phase == LoaderPhase::Hidden {
                l.sink.finish(LOADER_DONE_CLASS);
                l.driver.stop();
                log::info!("[loader] done");
            }
        }
    }

    pub fn teardown(&mut self) {
        self.frames.stop();
        self.listeners.clear();
        self.magnet_listeners.clear();
        self.hover.clear();
        // no pose from this page may outlive it
        if let Some(c) = &mut self.cursor {
            c.driver.stop();
            c.sink.clear();
        }
        if let Some(l) = &mut self.logo {
            l.driver.stop();
            render::clear_transform(&l.el);
        }
        for m in &mut self.magnets {
            m.stop();
            m.clear();
        }
        if let Some(l) = &mut self.loader {
            l.driver.stop();
        }
        log::info!("[unmount] listeners detached, frame loop cancelled");
    }
}
