use compare::Compare;
use ::quickcheck::{Arbitrary, Gen};
use super::{Map, Tree};

impl<K, V, C> Arbitrary for Map<K, V, C>
    where K: Arbitrary, V: Arbitrary, C: 'static + Clone + Compare<K> + Default {

    fn arbitrary(gen: &mut Gen) -> Self {
        Vec::<(K, V)>::arbitrary(gen).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let vec: Vec<(K, V)> = self.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}

impl<K, V, C> Arbitrary for Tree<K, V, C>
    where K: Arbitrary, V: Arbitrary, C: 'static + Clone + Compare<K> + Default {

    fn arbitrary(gen: &mut Gen) -> Self { Tree::from(Map::arbitrary(gen)) }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.as_map().shrink().map(Tree::from))
    }
}
