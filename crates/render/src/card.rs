use crate::layout::*;
use crate::scene::{Anchor, CardScene, Element, Stroke, TextRun, Transform};
use bingo_types::{BingoCard, Color, Participant, BALL_COLUMNS, GRID_SIZE};
use chrono::{Local, NaiveDate};

const INK: Color = Color::BLACK;
const LABEL: Color = Color::gray(0x66);
const MUTED: Color = Color::rgb(0x64, 0x74, 0x8b);
const HAIRLINE: Color = Color::rgb(0xe2, 0xe8, 0xf0);
const FREE_FILL: Color = Color::rgb(0xf1, 0xf5, 0xf9);
const FREE_STROKE: Color = Color::rgb(0xcb, 0xd5, 0xe1);
const FREE_MARK: Color = Color::rgb(0x94, 0xa3, 0xb8);

const STAR_PATH: &str =
    "M0 -10 L2.5 -3 L10 -2 L4.5 3 L6 10 L0 6 L-6 10 L-4.5 3 L-12 -2 L-2.5 -3 Z";

/// Background and letter color of each column header, B through O.
const COLUMN_COLORS: [(Color, Color); GRID_SIZE] = [
    (Color::rgb(0x25, 0x63, 0xeb), Color::WHITE),
    (Color::rgb(0xdc, 0x26, 0x26), Color::WHITE),
    (Color::rgb(0xe2, 0xe8, 0xf0), Color::rgb(0x33, 0x41, 0x55)),
    (Color::rgb(0x05, 0x96, 0x69), Color::WHITE),
    (Color::rgb(0xd9, 0x77, 0x06), Color::WHITE),
];

/// Lays out one printable card as vector artwork.
#[derive(Debug, Clone)]
pub struct CardRenderer {
    title: String,
    subtitle: String,
    date: NaiveDate,
}

impl CardRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
            date: Local::now().date_naive(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Pins the printed date; defaults to today.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn render(&self, participant: &Participant, card: &BingoCard) -> CardScene {
        let mut scene = CardScene::new(CANVAS_WIDTH, CANVAS_HEIGHT);
        scene.push(Element::Background {
            from: Color::rgb(0xf8, 0xfa, 0xfc),
            to: Color::WHITE,
        });
        self.header(&mut scene);
        scene.push(participant_block(participant));
        scene.push(self.card_id_block(card));
        scene.push(grid(card));
        scene.push(footer());
        scene
    }

    fn header(&self, scene: &mut CardScene) {
        scene.push(Element::Text(TextRun::new(
            PAGE_MARGIN,
            60.0,
            self.title.to_uppercase(),
            42.0,
            900,
            INK,
        )));
        if !self.subtitle.is_empty() {
            scene.push(Element::Text(TextRun::new(
                PAGE_MARGIN,
                85.0,
                self.subtitle.clone(),
                18.0,
                600,
                Color::gray(0x44),
            )));
        }
        scene.push(Element::Line {
            x1: PAGE_MARGIN,
            y1: HEADER_RULE_Y,
            x2: CANVAS_WIDTH - PAGE_MARGIN,
            y2: HEADER_RULE_Y,
            stroke: Stroke::new(INK, 3.0),
        });
    }

    fn card_id_block(&self, card: &BingoCard) -> Element {
        Element::Group {
            transform: Transform::translate(CANVAS_WIDTH - PAGE_MARGIN, 60.0),
            anchor: Some(Anchor::End),
            children: vec![
                Element::Text(TextRun::new(0.0, 0.0, "CARTÓN N°", 14.0, 800, MUTED).spaced(1.0)),
                Element::Text(
                    TextRun::new(0.0, 35.0, card.id.as_str(), 35.0, 900, INK).spaced(-1.0),
                ),
                Element::Text(TextRun::new(
                    0.0,
                    55.0,
                    self.date.format("%d/%m/%Y").to_string(),
                    14.0,
                    600,
                    LABEL,
                )),
            ],
        }
    }
}

fn participant_block(participant: &Participant) -> Element {
    Element::group(
        Transform::translate(PAGE_MARGIN, PARTICIPANT_BLOCK_Y),
        vec![
            Element::Text(TextRun::new(0.0, 0.0, "PARTICIPANTE", 12.0, 800, LABEL).spaced(1.0)),
            Element::Text(TextRun::new(
                0.0,
                30.0,
                participant.full_name().to_uppercase(),
                28.0,
                800,
                INK,
            )),
            Element::Line {
                x1: 0.0,
                y1: 45.0,
                x2: 350.0,
                y2: 45.0,
                stroke: Stroke::new(HAIRLINE, 1.0),
            },
            Element::Text(TextRun::new(400.0, 0.0, "DNI/ID", 12.0, 800, LABEL).spaced(1.0)),
            Element::Text(TextRun::new(
                400.0,
                30.0,
                participant.dni.clone(),
                24.0,
                700,
                Color::gray(0x22),
            )),
        ],
    )
}

fn grid(card: &BingoCard) -> Element {
    let mut children = Vec::with_capacity(GRID_SIZE + 2 * card.numbers.len());

    for (col, (letter, (bg, fg))) in BALL_COLUMNS.iter().zip(COLUMN_COLORS).enumerate() {
        let (cx, cy) = header_center(col);
        children.push(Element::Circle {
            cx,
            cy,
            r: CELL_SIZE / 2.0,
            fill: bg,
        });
        children.push(Element::Text(
            TextRun::new(cx, cy + 20.0, letter.to_string(), 50.0, 900, fg)
                .anchored(Anchor::Middle),
        ));
    }

    for (idx, number) in card.numbers.iter().enumerate() {
        let (x, y) = cell_origin(idx / GRID_SIZE, idx % GRID_SIZE);
        let (cx, cy) = (x + CELL_SIZE / 2.0, y + CELL_SIZE / 2.0);
        let free = BingoCard::is_free_space(idx);

        children.push(Element::Rect {
            x,
            y,
            width: CELL_SIZE,
            height: CELL_SIZE,
            radius: CELL_RADIUS,
            fill: if free { FREE_FILL } else { Color::WHITE },
            stroke: Some(Stroke::new(if free { FREE_STROKE } else { HAIRLINE }, 2.0)),
        });

        if free {
            children.push(Element::group(
                Transform::translate(cx, cy).scaled(1.8),
                vec![Element::Path {
                    d: STAR_PATH,
                    fill: FREE_MARK,
                }],
            ));
            children.push(Element::Text(
                TextRun::new(cx, cy + 35.0, "LIBRE", 12.0, 900, FREE_MARK)
                    .anchored(Anchor::Middle)
                    .spaced(1.0),
            ));
        } else {
            children.push(Element::Text(
                TextRun::new(cx, cy + 18.0, number.to_string(), 46.0, 800, INK)
                    .anchored(Anchor::Middle),
            ));
        }
    }

    Element::group(Transform::translate(GRID_MARGIN_X, GRID_TOP), children)
}

fn footer() -> Element {
    Element::group(
        Transform::translate(PAGE_MARGIN, FOOTER_Y),
        vec![
            Element::Line {
                x1: 0.0,
                y1: 0.0,
                x2: CONTENT_WIDTH,
                y2: 0.0,
                stroke: Stroke::new(HAIRLINE, 2.0),
            },
            Element::Text(TextRun::new(0.0, 35.0, "¡Mucha Suerte! 🍀", 16.0, 600, MUTED)),
            Element::Text(
                TextRun::new(
                    CONTENT_WIDTH,
                    25.0,
                    "Sistema de Bingo Virtual",
                    16.0,
                    800,
                    Color::rgb(0x0f, 0x17, 0x2a),
                )
                .anchored(Anchor::End),
            ),
            Element::Text(
                TextRun::new(CONTENT_WIDTH, 45.0, "Generado automáticamente", 13.0, 400, FREE_MARK)
                    .anchored(Anchor::End),
            ),
        ],
    )
}

/// One-shot form of [`CardRenderer::render`].
pub fn render_card(
    participant: &Participant,
    card: &BingoCard,
    title: &str,
    subtitle: &str,
) -> CardScene {
    CardRenderer::new(title).with_subtitle(subtitle).render(participant, card)
}
