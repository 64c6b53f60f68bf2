#![allow(dead_code)]

use autowiring::{
    catalog, AutowiringFactory, Config, Container, Inspectable, InstantiateErrorKind, Param, Precedence, Services, Signature,
};
use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;
use std::{any::type_name, sync::Arc};

#[derive(Default)]
struct B;

#[derive(Default)]
struct CAAAAA;

struct A(Arc<B>, Arc<C>, u16);
struct C(Arc<CAAAAA>, Arc<dyn Container>);

impl Inspectable for B {
    fn signature() -> Signature<Self> {
        Signature::implicit()
    }
}

impl Inspectable for CAAAAA {
    fn signature() -> Signature<Self> {
        Signature::implicit()
    }
}

impl Inspectable for C {
    fn signature() -> Signature<Self> {
        Signature::public(|args| Ok::<_, InstantiateErrorKind>(C(args.take()?, args.container()?)))
            .param(Param::<CAAAAA>::dependency("caaaaa"))
            .param(Param::<dyn Container>::container("container"))
    }
}

impl Inspectable for A {
    fn signature() -> Signature<Self> {
        Signature::public(|args| Ok::<_, InstantiateErrorKind>(A(args.take()?, args.take()?, args.take_cloned()?)))
            .param(Param::<B>::dependency("b"))
            .param(Param::<C>::dependency("c"))
            .param(Param::<u16>::dependency("port").with_default(80))
    }
}

#[inline]
fn services() -> Services {
    let mut services = Services::new();
    services.insert(B);
    services.insert(CAAAAA);
    services.insert(C(Arc::new(CAAAAA), Arc::new(Services::new())));
    services
}

#[inline]
fn factory_create(factory: &AutowiringFactory, container: &Arc<dyn Container>) {
    let _ = factory.create(type_name::<A>(), container).unwrap();
}

fn criterion_benchmark(c: &mut Criterion) {
    let container: Arc<dyn Container> = Arc::new(services());
    let configured: Arc<dyn Container> = {
        let target = type_name::<A>();
        let mut services = services();
        services.insert_named("bar", B);
        services.insert_named("config", json!({ "autowiring": { target: ["bar"] } }));
        Arc::new(services)
    };

    let factory = AutowiringFactory::new(catalog![A, B, C, CAAAAA]);
    let factory_config_first = AutowiringFactory::with_config(
        catalog![A, B, C, CAAAAA],
        Config {
            precedence: Precedence::ConfigFirst,
            ..Config::default()
        },
    );

    c.bench_function("factory_create_without_params", |b| {
        b.iter(|| factory.create(type_name::<B>(), &container).unwrap())
    })
    .bench_function("factory_create", |b| {
        b.iter(|| {
            let container: Arc<dyn Container> = Arc::new(services());
            factory_create(&factory, &container)
        })
    })
    .bench_function("factory_create_with_cache", |b| b.iter(|| factory_create(&factory, &container)))
    .bench_function("factory_create_config_first_with_cache", |b| {
        b.iter(|| factory_create(&factory_config_first, &configured))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
