// Lifecycle of one chart session:
//
//   Unmounted --mount--> Mounted (empty) --set_data--> Mounted (rendering)
//        \                      \__________________________/
//         \______________________________ dispose ___________> Disposed
//
// At most one session exists per surface. Each mount registers exactly one
// resize listener and dispose removes it. Every call after dispose is inert.
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use shared::models::Series;
use tracing::{debug, info, trace, warn};
use uuid::Uuid;

use super::backend::{ChartBackend, ChartHandle};
use super::container::Container;
use super::options::ChartOptions;
use super::window::{ListenerId, WindowSignal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted(Uuid),
    /// The container is detached or has no width yet. Retry once it does.
    Deferred,
    AlreadyMounted,
    Disposed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceStatus {
    Unmounted,
    MountedEmpty,
    Rendering,
    Disposed,
}

struct ChartSession<C> {
    id: Uuid,
    chart: C,
    container: Rc<dyn Container>,
    width: u32,
    listener: ListenerId,
    bound: Option<Arc<Series>>,
}

enum SurfaceState<C> {
    Unmounted,
    Mounted(ChartSession<C>),
    Disposed,
}

struct SurfaceInner<B: ChartBackend> {
    backend: B,
    options: ChartOptions,
    state: SurfaceState<B::Chart>,
}

impl<B: ChartBackend> SurfaceInner<B> {
    fn handle_resize(&mut self) {
        let SurfaceState::Mounted(session) = &mut self.state else {
            trace!("Resize ignored: no live chart session");
            return;
        };
        let width = session.container.client_width();
        if width == 0 {
            trace!(session = %session.id, "Resize ignored: container collapsed");
            return;
        }
        session.chart.apply_width(width);
        session.width = width;
        debug!(session = %session.id, width, "Chart width synced to container");
    }
}

pub struct ChartSurface<B: ChartBackend + 'static> {
    inner: Rc<RefCell<SurfaceInner<B>>>,
    window: WindowSignal,
}

impl<B: ChartBackend + 'static> ChartSurface<B> {
    pub fn new(backend: B, options: ChartOptions, window: WindowSignal) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SurfaceInner {
                backend,
                options,
                state: SurfaceState::Unmounted,
            })),
            window,
        }
    }

    pub fn mount(&mut self, container: Rc<dyn Container>) -> MountOutcome {
        let mut inner = self.inner.borrow_mut();
        match inner.state {
            SurfaceState::Mounted(ref session) => {
                warn!(session = %session.id, "Mount ignored: surface already holds a session");
                return MountOutcome::AlreadyMounted;
            }
            SurfaceState::Disposed => {
                warn!(container = container.id(), "Mount ignored: surface was disposed");
                return MountOutcome::Disposed;
            }
            SurfaceState::Unmounted => {}
        }

        if !container.is_ready() {
            debug!(container = container.id(), "Container not measurable yet, mount deferred");
            return MountOutcome::Deferred;
        }

        let id = Uuid::new_v4();
        let width = container.client_width();
        let SurfaceInner { backend, options, state } = &mut *inner;

        let mut chart = backend.create_chart(id, container.as_ref(), width, options);
        chart.add_candlestick_series(&options.candles);

        let weak: Weak<RefCell<SurfaceInner<B>>> = Rc::downgrade(&self.inner);
        let listener = self.window.subscribe(move || {
            if let Some(inner) = weak.upgrade() {
                if let Ok(mut inner) = inner.try_borrow_mut() {
                    inner.handle_resize();
                }
            }
        });

        info!(session = %id, container = container.id(), width, height = options.height, "Chart session created");
        *state = SurfaceState::Mounted(ChartSession {
            id,
            chart,
            container,
            width,
            listener,
            bound: None,
        });
        MountOutcome::Mounted(id)
    }

    /// Replaces the displayed data with `series` and fits the time range to it.
    /// Returns false when there is no live session.
    pub fn set_data(&mut self, series: Arc<Series>) -> bool {
        let mut inner = self.inner.borrow_mut();
        match &mut inner.state {
            SurfaceState::Mounted(session) => {
                let points = series.to_chart_points();
                session.chart.set_series_data(&points);
                session.chart.fit_content();
                debug!(session = %session.id, bars = points.len(), "Series pushed to chart");
                session.bound = Some(series);
                true
            }
            SurfaceState::Unmounted => {
                trace!("set_data ignored: surface not mounted");
                false
            }
            SurfaceState::Disposed => {
                trace!("set_data ignored: surface disposed");
                false
            }
        }
    }

    /// Pushes `series` only if it is not the series already on screen.
    pub fn bind(&mut self, series: Arc<Series>) -> bool {
        let unchanged = match &self.inner.borrow().state {
            SurfaceState::Mounted(session) => session
                .bound
                .as_ref()
                .is_some_and(|current| Arc::ptr_eq(current, &series)),
            _ => false,
        };
        if unchanged {
            return false;
        }
        self.set_data(series)
    }

    pub fn dispose(&mut self) {
        let previous = std::mem::replace(&mut self.inner.borrow_mut().state, SurfaceState::Disposed);
        match previous {
            SurfaceState::Mounted(session) => {
                self.window.unsubscribe(session.listener);
                let id = session.id;
                session.chart.remove();
                info!(session = %id, "Chart session released");
            }
            SurfaceState::Unmounted => debug!("Surface disposed before it was mounted"),
            SurfaceState::Disposed => {}
        }
    }

    pub fn status(&self) -> SurfaceStatus {
        match &self.inner.borrow().state {
            SurfaceState::Unmounted => SurfaceStatus::Unmounted,
            SurfaceState::Mounted(session) if session.bound.is_some() => SurfaceStatus::Rendering,
            SurfaceState::Mounted(_) => SurfaceStatus::MountedEmpty,
            SurfaceState::Disposed => SurfaceStatus::Disposed,
        }
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.status(), SurfaceStatus::MountedEmpty | SurfaceStatus::Rendering)
    }

    pub fn session_id(&self) -> Option<Uuid> {
        match &self.inner.borrow().state {
            SurfaceState::Mounted(session) => Some(session.id),
            _ => None,
        }
    }

    pub fn width(&self) -> Option<u32> {
        match &self.inner.borrow().state {
            SurfaceState::Mounted(session) => Some(session.width),
            _ => None,
        }
    }

    pub fn bound_series(&self) -> Option<Arc<Series>> {
        match &self.inner.borrow().state {
            SurfaceState::Mounted(session) => session.bound.clone(),
            _ => None,
        }
    }
}

impl<B: ChartBackend + 'static> Drop for ChartSurface<B> {
    fn drop(&mut self) {
        self.dispose();
    }
}
