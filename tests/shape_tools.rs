use eframe_sketchpad::{BACKGROUND, SketchController, Tool};
use egui::{Color32, Pos2, pos2};

fn drag(controller: &mut SketchController, tool: Tool, from: Pos2, samples: &[Pos2]) {
    controller.select_tool(tool);
    controller.begin_stroke(from);
    for &pos in samples {
        controller.continue_stroke(pos);
    }
    controller.end_stroke();
}

fn at(controller: &SketchController, x: usize, y: usize) -> Color32 {
    controller.canvas().pixel(x, y).unwrap()
}

#[test]
fn test_rectangle_outline() {
    let mut controller = SketchController::new(200, 200);
    drag(&mut controller, Tool::Rectangle, pos2(50.0, 50.0), &[pos2(150.0, 120.0)]);

    // Corners and edges
    assert_eq!(at(&controller, 50, 50), Color32::BLACK);
    assert_eq!(at(&controller, 150, 120), Color32::BLACK);
    assert_eq!(at(&controller, 50, 85), Color32::BLACK);
    assert_eq!(at(&controller, 150, 85), Color32::BLACK);
    assert_eq!(at(&controller, 100, 50), Color32::BLACK);
    assert_eq!(at(&controller, 100, 120), Color32::BLACK);

    // Interior and outside stay white
    assert_eq!(at(&controller, 100, 85), BACKGROUND);
    assert_eq!(at(&controller, 40, 85), BACKGROUND);
    assert_eq!(at(&controller, 160, 85), BACKGROUND);
    assert_eq!(at(&controller, 100, 130), BACKGROUND);
}

#[test]
fn test_rectangle_filled() {
    let mut controller = SketchController::new(200, 200);
    controller.set_color(Color32::RED);
    controller.set_fill_shapes(true);
    drag(&mut controller, Tool::Rectangle, pos2(50.0, 50.0), &[pos2(150.0, 120.0)]);

    assert_eq!(at(&controller, 100, 85), Color32::RED);
    assert_eq!(at(&controller, 50, 50), Color32::RED);
    assert_eq!(at(&controller, 149, 119), Color32::RED);
    assert_eq!(at(&controller, 49, 85), BACKGROUND);
    assert_eq!(at(&controller, 150, 85), BACKGROUND);
    assert_eq!(at(&controller, 100, 120), BACKGROUND);
}

#[test]
fn test_rectangle_either_drag_direction() {
    let mut down_right = SketchController::new(200, 200);
    down_right.set_fill_shapes(true);
    drag(&mut down_right, Tool::Rectangle, pos2(50.0, 50.0), &[pos2(150.0, 120.0)]);

    let mut up_left = SketchController::new(200, 200);
    up_left.set_fill_shapes(true);
    drag(&mut up_left, Tool::Rectangle, pos2(150.0, 120.0), &[pos2(50.0, 50.0)]);

    assert_eq!(down_right.canvas(), up_left.canvas());
}

#[test]
fn test_circle_outline() {
    let mut controller = SketchController::new(200, 200);
    drag(&mut controller, Tool::Circle, pos2(100.0, 100.0), &[pos2(130.0, 100.0)]);

    for (x, y) in [(130, 100), (70, 100), (100, 70), (100, 130)] {
        assert_eq!(at(&controller, x, y), Color32::BLACK, "({x}, {y}) on the circle");
    }
    assert_eq!(at(&controller, 100, 100), BACKGROUND);
    assert_eq!(at(&controller, 100, 120), BACKGROUND);
    assert_eq!(at(&controller, 140, 100), BACKGROUND);
}

#[test]
fn test_circle_filled() {
    let mut controller = SketchController::new(200, 200);
    controller.set_color(Color32::BLUE);
    controller.set_fill_shapes(true);
    drag(&mut controller, Tool::Circle, pos2(100.0, 100.0), &[pos2(130.0, 100.0)]);

    assert_eq!(at(&controller, 100, 100), Color32::BLUE);
    assert_eq!(at(&controller, 100, 125), Color32::BLUE);
    assert_eq!(at(&controller, 135, 100), BACKGROUND);
    assert_eq!(at(&controller, 125, 125), BACKGROUND);
}

#[test]
fn test_triangle_outline() {
    let mut controller = SketchController::new(200, 200);
    drag(&mut controller, Tool::Triangle, pos2(100.0, 100.0), &[pos2(120.0, 150.0)]);

    // Apex, both base vertices and the three edges
    assert_eq!(at(&controller, 100, 100), Color32::BLACK);
    assert_eq!(at(&controller, 120, 150), Color32::BLACK);
    assert_eq!(at(&controller, 80, 150), Color32::BLACK);
    assert_eq!(at(&controller, 110, 125), Color32::BLACK);
    assert_eq!(at(&controller, 90, 125), Color32::BLACK);
    assert_eq!(at(&controller, 100, 150), Color32::BLACK);

    assert_eq!(at(&controller, 100, 135), BACKGROUND);
}

#[test]
fn test_triangle_filled() {
    let mut controller = SketchController::new(200, 200);
    controller.set_color(Color32::GREEN);
    controller.set_fill_shapes(true);
    drag(&mut controller, Tool::Triangle, pos2(100.0, 100.0), &[pos2(120.0, 150.0)]);

    assert_eq!(at(&controller, 100, 140), Color32::GREEN);
    assert_eq!(at(&controller, 119, 149), Color32::GREEN);
    assert_eq!(at(&controller, 81, 149), Color32::GREEN);
    assert_eq!(at(&controller, 121, 149), BACKGROUND);
    assert_eq!(at(&controller, 100, 155), BACKGROUND);
    assert_eq!(at(&controller, 90, 105), BACKGROUND);
}

#[test]
fn test_preview_leaves_no_trail() {
    let mut controller = SketchController::new(200, 200);
    drag(
        &mut controller,
        Tool::Circle,
        pos2(100.0, 100.0),
        &[pos2(160.0, 100.0), pos2(145.0, 100.0), pos2(130.0, 100.0)],
    );

    let mut expected = SketchController::new(200, 200);
    drag(&mut expected, Tool::Circle, pos2(100.0, 100.0), &[pos2(130.0, 100.0)]);

    assert_eq!(at(&controller, 160, 100), BACKGROUND);
    assert_eq!(at(&controller, 145, 100), BACKGROUND);
    assert_eq!(controller.canvas(), expected.canvas());
}

#[test]
fn test_sequential_strokes_keep_only_final_previews() {
    let mut controller = SketchController::new(200, 200);
    drag(
        &mut controller,
        Tool::Rectangle,
        pos2(10.0, 10.0),
        &[pos2(90.0, 90.0), pos2(50.0, 50.0)],
    );
    drag(
        &mut controller,
        Tool::Triangle,
        pos2(150.0, 100.0),
        &[pos2(190.0, 190.0), pos2(170.0, 140.0)],
    );

    let mut expected = SketchController::new(200, 200);
    drag(&mut expected, Tool::Rectangle, pos2(10.0, 10.0), &[pos2(50.0, 50.0)]);
    drag(&mut expected, Tool::Triangle, pos2(150.0, 100.0), &[pos2(170.0, 140.0)]);

    assert_eq!(at(&controller, 90, 60), BACKGROUND);
    assert_eq!(controller.canvas(), expected.canvas());
}

#[test]
fn test_fill_mode_ignored_by_brush() {
    let mut plain = SketchController::new(60, 40);
    let mut filled = SketchController::new(60, 40);
    filled.set_fill_shapes(true);

    let samples = [pos2(10.0, 10.0), pos2(50.0, 10.0), pos2(50.0, 30.0)];
    drag(&mut plain, Tool::Brush, pos2(10.0, 10.0), &samples);
    drag(&mut filled, Tool::Brush, pos2(10.0, 10.0), &samples);

    assert_eq!(plain.canvas(), filled.canvas());
    assert_eq!(at(&filled, 40, 25), BACKGROUND);
}

#[test]
fn test_click_in_place_leaves_no_mark() {
    for fill in [false, true] {
        for tool in Tool::ALL {
            let mut controller = SketchController::new(60, 60);
            controller.set_fill_shapes(fill);
            controller.set_brush_width(10).unwrap();
            let click = pos2(30.0, 30.0);
            drag(&mut controller, tool, click, &[click, click]);
            assert!(
                controller.canvas().is_uniform(BACKGROUND),
                "{tool} (fill: {fill}) left a mark"
            );
        }
    }
}
