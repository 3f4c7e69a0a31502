use crate::feed::{SuggestionItem, SuggestionKind};

/// Display projection of one item at a position in the rendered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card<'a> {
    /// Position within the rendered list (not the store)
    pub index: usize,
    pub glyph: char,
    pub kind: SuggestionKind,
    pub title: &'a str,
    pub description: &'a str,
    pub selected: bool,
}

/// One card per item, in order; the card at `selection` is marked selected
pub fn cards<'a, I>(list: I, selection: Option<usize>) -> Vec<Card<'a>>
where
    I: IntoIterator<Item = &'a SuggestionItem>,
{
    list.into_iter()
        .enumerate()
        .map(|(index, item)| Card {
            index,
            glyph: item.kind().glyph(),
            kind: item.kind(),
            title: item.title(),
            description: item.description(),
            selected: selection == Some(index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::seed::generate_page;

    #[test]
    fn test_cards_are_indexed_by_position() {
        let items = generate_page(1);
        let cards = cards(&items, None);
        assert_eq!(cards.len(), 6);
        for (pos, card) in cards.iter().enumerate() {
            assert_eq!(card.index, pos);
            assert!(!card.selected);
        }
        assert_eq!(cards[0].title, "Top 10 Travel Spots 7");
        assert_eq!(cards[0].glyph, 'V');
    }

    #[test]
    fn test_selection_outside_list_marks_nothing() {
        let items = generate_page(0);
        let cards = cards(&items, Some(42));
        assert!(cards.iter().all(|c| !c.selected));
    }
}
