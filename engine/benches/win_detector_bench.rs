use criterion::{Criterion, criterion_group, criterion_main};
use engine::PlayerId;
use engine::connect_four::{Board, Position, check_win, check_win_at, move_engine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

/// Random legal playouts stopped just before anyone wins, paired with the last move.
fn sample_positions(height: usize, width: usize, count: usize) -> Vec<(Board, Position, PlayerId)> {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut samples = Vec::with_capacity(count);

    while samples.len() < count {
        let mut board = Board::create(height, width).unwrap();
        let mut player = PlayerId::One;
        let target_moves = rng.random_range(1..=height * width);

        for _ in 0..target_moves {
            let open = board.open_columns();
            if open.is_empty() {
                break;
            }
            let column = open[rng.random_range(0..open.len())];
            let position = move_engine::drop_piece(&mut board, column as isize, player).unwrap();
            if check_win(&board, player) {
                break;
            }
            samples.push((board.clone(), position, player));
            player = player.other();
        }
    }

    samples.truncate(count);
    samples
}

fn win_detector_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("win_detector");

    for (height, width) in [(6, 7), (16, 16)] {
        let samples = sample_positions(height, width, 256);

        group.bench_function(format!("full_scan_{}x{}", height, width), |b| {
            b.iter(|| {
                for (board, _, player) in &samples {
                    black_box(check_win(board, *player));
                }
            })
        });

        group.bench_function(format!("localized_{}x{}", height, width), |b| {
            b.iter(|| {
                for (board, position, player) in &samples {
                    black_box(check_win_at(board, *position, *player));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, win_detector_bench);
criterion_main!(benches);
