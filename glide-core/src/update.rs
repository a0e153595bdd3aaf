use crate::carousel::Carousel;
use crate::messages::CarouselMessage;
use crate::schedule::Directives;

/// Apply one message to `carousel` and return the scheduling work it
/// implies for the host.
pub fn update(carousel: &mut Carousel, msg: CarouselMessage) -> Directives {
    match msg {
        CarouselMessage::PointerDown { x, at } => carousel.drag_start(x, at),
        CarouselMessage::PointerMove { x, at } => {
            carousel.drag_move(x, at);
            Directives::none()
        }
        CarouselMessage::PointerUp | CarouselMessage::PointerLeave => {
            carousel.drag_end()
        }
        CarouselMessage::MomentumTick(handle) => carousel.momentum_tick(handle),
        CarouselMessage::Frame(handle, now) => carousel.frame(handle, now),
        CarouselMessage::SnapTo(index) => carousel.snap_to(index),
        CarouselMessage::ScrollPrev => carousel.scroll_prev(),
        CarouselMessage::ScrollNext => carousel.scroll_next(),
        CarouselMessage::ContainerResized(width) => {
            carousel.resize(width);
            Directives::none()
        }
        CarouselMessage::ItemsChanged(count) => {
            carousel.set_item_count(count);
            Directives::none()
        }
    }
}
