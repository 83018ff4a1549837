use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rollcall_core::model::parse_date;
use rollcall_core::{Register, StudentId};

fn make_register(students: u32, days: u32) -> Register {
    let mut register = Register::new();
    for n in 0..students {
        register
            .add_student(&format!("Student {n:03}"), &format!("G{}", n % 4))
            .unwrap();
    }
    for day in 1..=days {
        let date = format!("2024-03-{day:02}");
        for n in 1..=students {
            let status = if (n + day) % 5 == 0 { "a" } else { "p" };
            register
                .record_attendance(&date, StudentId::new(n), status)
                .unwrap();
        }
    }
    register
}

fn bench_find_by_name(c: &mut Criterion) {
    let register = make_register(60, 0);

    c.bench_function("find_by_name_last_of_60", |b| {
        b.iter(|| register.find_by_name(black_box("student 059")))
    });
}

fn bench_view_date(c: &mut Criterion) {
    let register = make_register(60, 28);
    let date = parse_date("2024-03-15").unwrap();

    c.bench_function("view_on_60_students", |b| {
        b.iter(|| register.view_on(black_box(date)))
    });
}

fn bench_search_student(c: &mut Criterion) {
    let register = make_register(60, 28);

    c.bench_function("search_student_28_days", |b| {
        b.iter(|| register.search_student(black_box("Student 030")))
    });
}

criterion_group!(
    benches,
    bench_find_by_name,
    bench_view_date,
    bench_search_student
);
criterion_main!(benches);
