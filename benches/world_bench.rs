use criterion::{black_box, criterion_group, criterion_main, Criterion};
use impulse_engine::{
    constraints::JointConstraint,
    math::Vec2,
    objects::Body,
    shapes::{BoxShape, Circle, Shape},
    world::World,
};

// --- Helper for box stack benchmarks ---
fn run_box_stack_bench(world: &mut World, num_boxes: usize) {
    let size = 20.0;
    for i in 0..num_boxes {
        let y_pos = 480.0 - size - (i as f64 * (size * 1.05)); // Stack with slight gap
        let mut body = Body::new(
            Shape::Box(BoxShape::new(size, size).unwrap()),
            320.0,
            y_pos,
            1.0,
        );
        body.restitution = 0.1;
        world.add_body(body);
    }

    // Simulate for a fixed number of steps
    let dt = 1.0 / 60.0;
    let steps = 30;
    for _ in 0..steps {
        world.step(black_box(dt));
    }
}

// --- Helper for joint chain benchmarks ---
fn run_joint_chain_bench(world: &mut World, num_links: usize) {
    let link_length = 15.0;
    let anchor_pos = Vec2::new(320.0, 50.0);

    let anchor = world.add_body(Body::new(
        Shape::Circle(Circle::new(3.0).unwrap()),
        anchor_pos.x,
        anchor_pos.y,
        0.0,
    ));

    let mut last = anchor;
    for i in 0..num_links {
        let x = anchor_pos.x + link_length * (i + 1) as f64;
        let link = world.add_body(Body::new(
            Shape::Circle(Circle::new(3.0).unwrap()),
            x,
            anchor_pos.y,
            1.0,
        ));
        let joint_at = world.bodies[last].position;
        let joint = JointConstraint::new(&world.bodies, last, link, joint_at);
        world.add_joint(joint);
        last = link;
    }

    // Simulate
    let dt = 1.0 / 60.0;
    let steps = 30;
    for _ in 0..steps {
        world.step(black_box(dt));
    }
}

// Benchmark for a stack of boxes falling onto a static floor
fn bench_box_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_stack");

    for num_boxes in [10, 50, 200].iter() {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(num_boxes),
            num_boxes,
            |b, &n| {
                b.iter(|| {
                    let mut world = World::new(9.8);
                    world.add_body(Body::new(
                        Shape::Box(BoxShape::new(640.0, 40.0).unwrap()),
                        320.0,
                        500.0,
                        0.0,
                    ));
                    run_box_stack_bench(&mut world, black_box(n));
                });
            },
        );
    }
    group.finish();
}

// Benchmark for a chain of bodies linked by joint constraints
fn bench_joint_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("joint_chain");

    for num_links in [10, 50, 200].iter() {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(num_links),
            num_links,
            |b, &n| {
                b.iter(|| {
                    let mut world = World::new(9.8);
                    run_joint_chain_bench(&mut world, black_box(n));
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_box_stack, bench_joint_chain);
criterion_main!(benches);
