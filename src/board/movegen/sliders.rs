use super::super::{Board, Color, DestinationList, Square};

impl Board {
    /// Walk each direction until the edge, an own piece (excluded) or an
    /// enemy piece (included as a capture).
    pub(super) fn slide(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        list: &mut DestinationList,
    ) {
        for &(df, dr) in directions {
            let mut current = from;
            while let Some(to) = current.offset(df, dr) {
                let cell = self.cell(to);
                if cell.is_color(color) {
                    break;
                }
                list.push(to);
                if !cell.is_empty() {
                    break;
                }
                current = to;
            }
        }
    }
}
