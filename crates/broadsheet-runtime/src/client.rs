use crate::controller::{BrowserEvent, FetchRequest, PostBrowser};
use crate::fetch::ContentFetcher;
use crate::history::HistoryPort;
use crate::surface::BrowserSurface;
use broadsheet_types::Registry;

/// Async facade over the controller: dispatches an event, runs the fetch
/// it produces (if any), and feeds the outcome back in as a
/// [`BrowserEvent::ContentLoaded`].
///
/// The facade settles each navigation before returning, which is what a
/// sequential driver (the CLI) wants. Concurrent drivers can use
/// [`PostBrowser`] directly and deliver completions in any order; the
/// controller's generation check handles interleavings.
pub struct Browser<S: BrowserSurface, H: HistoryPort, F: ContentFetcher> {
    controller: PostBrowser<S, H>,
    fetcher: F,
}

impl<S: BrowserSurface, H: HistoryPort, F: ContentFetcher> Browser<S, H, F> {
    pub fn new(registry: Registry, surface: S, history: H, fetcher: F) -> Self {
        Self {
            controller: PostBrowser::new(registry, surface, history),
            fetcher,
        }
    }

    pub async fn start(&mut self, fragment: Option<&str>) {
        let request = self.controller.start(fragment);
        self.settle(request).await;
    }

    pub async fn dispatch(&mut self, event: BrowserEvent) {
        let request = self.controller.dispatch(event);
        self.settle(request).await;
    }

    pub fn controller(&self) -> &PostBrowser<S, H> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PostBrowser<S, H> {
        &mut self.controller
    }

    async fn settle(&mut self, request: Option<FetchRequest>) {
        let Some(request) = request else {
            return;
        };

        let result = self.fetcher.fetch(&request.content_ref).await;
        self.controller.dispatch(BrowserEvent::ContentLoaded {
            generation: request.generation,
            result,
        });
    }
}
