use arcnet::network::{
    parse_network, render_arc_diagram, ArcLayout, Interpolate, Link, NetworkFormat, Node,
    Orientation, SortOrder,
};
use proptest::prelude::*;

fn chain(count: usize, width: f32, height: f32) -> ArcLayout {
    let nodes = (0..count).map(|i| Node::new(format!("n{i}"))).collect();
    let links = (1..count).map(|i| Link::new(i - 1, i)).collect();
    let mut layout = ArcLayout::from_network(nodes, links).unwrap();
    layout.network_mut().set_size(width, height).unwrap();
    layout
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop::sample::select(Orientation::ALL.to_vec())
}

proptest! {
    #[test]
    fn breadths_are_evenly_spaced(count in 1usize..64) {
        let mut layout = chain(count, 640.0, 480.0);
        layout.build();
        let mut previous = 0.0f32;
        for (i, node) in layout.nodes().iter().enumerate() {
            let expected = (i as f32 + 0.5) / count as f32;
            prop_assert_eq!(node.breadth, expected);
            prop_assert!(node.breadth > previous && node.breadth < 1.0);
            previous = node.breadth;
        }
    }

    #[test]
    fn radial_nodes_lie_on_the_circle(
        count in 1usize..48,
        width in 10.0f32..1000.0,
        height in 10.0f32..1000.0,
    ) {
        let mut layout = chain(count, width, height);
        layout.set_orient(Orientation::Radial).build();
        let radius = width.min(height) / 2.0;
        for node in layout.nodes() {
            let distance = (node.x - width / 2.0).hypot(node.y - height / 2.0);
            prop_assert!((distance - radius).abs() <= radius * 1e-4 + 1e-3);
        }
    }

    #[test]
    fn rebuilding_is_bit_identical(
        count in 0usize..32,
        orient in orientation(),
        directed in any::<bool>(),
    ) {
        let mut layout = chain(count, 300.0, 200.0);
        layout.set_orient(orient).set_directed(directed).build();
        let first = layout.nodes().to_vec();

        layout.network_mut().invalidate();
        layout.build();
        for (a, b) in first.iter().zip(layout.nodes()) {
            prop_assert_eq!(a.x.to_bits(), b.x.to_bits());
            prop_assert_eq!(a.y.to_bits(), b.y.to_bits());
            prop_assert_eq!(a.breadth.to_bits(), b.breadth.to_bits());
            prop_assert_eq!(a.mid_angle.to_bits(), b.mid_angle.to_bits());
        }
    }

    #[test]
    fn undirected_arcs_ignore_link_direction(count in 2usize..16, orient in orientation()) {
        let mut layout = chain(count, 300.0, 200.0);
        layout.set_orient(orient).build();
        let forward = Link::new(0, count - 1);
        let backward = Link::new(count - 1, 0);
        let [a, b] = layout.link_endpoints(&forward).unwrap();
        let [c, d] = layout.link_endpoints(&backward).unwrap();
        prop_assert_eq!((a.index, b.index), (c.index, d.index));
    }
}

#[test]
fn edge_orientations_map_to_their_edge() {
    let mut layout = chain(4, 200.0, 100.0);
    layout.build();
    for node in layout.nodes() {
        assert_eq!((node.x, node.y), (node.breadth * 200.0, 100.0));
    }

    layout.set_orient(Orientation::Left).build();
    for node in layout.nodes() {
        assert_eq!((node.x, node.y), (0.0, node.breadth * 100.0));
    }
}

#[test]
fn interpolate_and_reverse_per_orientation() {
    let mut layout = chain(3, 200.0, 100.0);
    let expected = [
        (Orientation::Top, Interpolate::Polar, true),
        (Orientation::Bottom, Interpolate::Polar, false),
        (Orientation::Left, Interpolate::Polar, false),
        (Orientation::Right, Interpolate::Polar, true),
        (Orientation::Radial, Interpolate::Linear, false),
    ];
    for (orient, interpolate, reverse) in expected {
        layout.set_orient(orient).build();
        assert_eq!(layout.interpolate(), interpolate, "{orient}");
        assert_eq!(layout.is_reversed(), reverse, "{orient}");
    }
}

#[test]
fn worked_endpoint_example() {
    // s sits left of t
    let nodes = (0..5).map(|i| Node::new(format!("n{i}"))).collect();
    let mut layout = ArcLayout::from_network(nodes, vec![Link::new(0, 3)]).unwrap();
    layout.build();
    let link = layout.links()[0];
    let (s, t) = layout.network().link_nodes(&link).unwrap();
    assert!((s.breadth - 0.1).abs() < 1e-6 && (t.breadth - 0.7).abs() < 1e-6);

    let [from, to] = layout.link_endpoints(&link).unwrap();
    assert_eq!((from.index, to.index), (0, 3));

    layout.set_orient(Orientation::Right).build();
    let [from, to] = layout.link_endpoints(&link).unwrap();
    assert_eq!((from.index, to.index), (3, 0));
}

#[test]
fn degree_sort_puts_hubs_first() {
    let input = r#"{
        "nodes": [{"name": "leaf"}, {"name": "hub"}, {"name": "other"}],
        "links": [
            {"source": 1, "target": 0},
            {"source": 1, "target": 2},
            {"source": 1, "target": 2, "value": 3}
        ]
    }"#;
    let mut layout = ArcLayout::new(parse_network(input, NetworkFormat::Json).unwrap());
    layout.set_sort_order(SortOrder::Degree).build();
    assert_eq!(layout.order(), vec![1, 2, 0]);
    assert_eq!(layout.nodes()[1].breadth, 0.5 / 3.0);

    let svg = render_arc_diagram(&layout, 10.0);
    assert_eq!(svg.matches("<path").count(), 3);
}
