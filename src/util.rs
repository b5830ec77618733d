use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a rectangle of the given size centered within `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [inner] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [inner] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(inner);
    inner
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(12, 6), Rect::new(34, 9, 12, 6))]
    #[case(Rect::new(10, 5, 20, 10), Size::new(20, 10), Rect::new(10, 5, 20, 10))]
    #[case(Rect::new(10, 5, 20, 10), Size::new(4, 2), Rect::new(18, 9, 4, 2))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] r: Rect) {
        assert_eq!(center_rect(area, size), r);
    }

    #[test]
    fn display_area_in_large_terminal() {
        assert_eq!(
            get_display_area(Rect::new(0, 0, 100, 30)),
            Rect::new(10, 3, 80, 24)
        );
    }
}
