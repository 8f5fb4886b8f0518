use criterion::{criterion_group, criterion_main, Criterion};
use image_filter_app::img::{
	filter::{filter_trait::Filter, MedianFilter, Mosaic, ScharrEdgeDetection},
	ColorDepth, Img,
};

fn create_img(w: usize, h: usize) -> Img {
	let pixels: Vec<u8> = (0..w * h * 3)
		.map(|i| (i * 31 % 256) as u8)
		.collect();
	Img::new(w, h, ColorDepth::Rgb8, pixels).unwrap()
}

fn bench_filter<F: Filter>(c: &mut Criterion, title: &str, filter: F) {
	let img = create_img(1000, 1000);

	let mut group = c.benchmark_group("filters img 1000x1000");
	group.sample_size(10);
	group.bench_function(title, move |b| {
		b.iter(|| {
			let _res = filter.process(&img).unwrap();
		});
	});
	group.finish();
}

pub fn filter_mosaic(c: &mut Criterion) {
	bench_filter(c, "mosaic 10", Mosaic::default());
}

pub fn filter_median(c: &mut Criterion) {
	bench_filter(c, "median 5x5", MedianFilter::default());
}

pub fn filter_scharr(c: &mut Criterion) {
	bench_filter(c, "scharr", ScharrEdgeDetection::default());
}

criterion_group!(benches, filter_mosaic, filter_median, filter_scharr);
criterion_main!(benches);
