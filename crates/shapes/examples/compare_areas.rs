//! Area comparison between a circle and a rectangle, plus role projections.
//!
//! Run: cargo run -p shapes --example compare_areas

use shapes::prelude::*;

fn main() -> Result<(), ShapeError> {
    let c = create_circle(3.0)?;
    let r = create_rectangle(3.0, 2.0)?;
    println!("{}", describe(&r));
    println!("{}", describe(&c));
    println!("compare(circle, rectangle) = {}", compare(&c, &r));

    let tagged = ShapeBuilder::circle(3.0)
        .attribute("internalId", "c-001", Visibility::Private)
        .build()?;
    for role in [Role::User, Role::Admin] {
        let view = project(&tagged, role);
        let fields: Vec<String> = view.iter().map(|(k, v)| format!("{k}={v}")).collect();
        println!("{role:?}: {}", fields.join(", "));
    }

    if let Err(err) = create_circle(-5.0) {
        println!("rejected: {err}");
    }
    Ok(())
}
