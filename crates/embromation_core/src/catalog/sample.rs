//! Built-in sample catalog.
//!
//! Two fixed groups with four items each, available at design time and run
//! time alike. Item content is never stored; it is generated on read.

use crate::catalog::{Catalog, CatalogError};
use crate::config::CoreConfig;
use crate::model::entry::EntryMeta;
use log::info;

struct SampleEntry {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    image_path: &'static str,
    description: &'static str,
}

struct SampleGroup {
    group: SampleEntry,
    items: &'static [SampleEntry],
}

const SAMPLE_GROUPS: &[SampleGroup] = &[
    SampleGroup {
        group: SampleEntry {
            id: "Group-1",
            title: "Mundo corporativo",
            subtitle: "Sua frase de efeito sempre a mão",
            image_path: "Assets/Dilma.png",
            description: "É de toda forma imprescindível que analisemos as posições das verticais de nossa atividade maximizando assim, as diretrizes de desenvolvimento sustentável.",
        },
        items: &[
            SampleEntry {
                id: "Group-1-Item-1",
                title: "E-mail para equipe",
                subtitle: "Confiança na liderança",
                image_path: "Assets/foto1.jpg",
                description: "Mostre-se como um chefe superior, seu time  irá achar que você é um guru.",
            },
            SampleEntry {
                id: "Group-1-Item-2",
                title: "Discurso em público",
                subtitle: "Conquiste a massa",
                image_path: "Assets/foto2.jpg",
                description: "Prepare discursos capazes de curar a insônia da plateia",
            },
            SampleEntry {
                id: "Group-1-Item-3",
                title: "Para o Chefe",
                subtitle: "Ganhe um aumento",
                image_path: "Assets/foto3.jpg",
                description: "Impressione seu chefe com palavras que vão parecer que você é o cara",
            },
            SampleEntry {
                id: "Group-1-Item-4",
                title: "Para peuniões de status",
                subtitle: "Destaque-se na multidão",
                image_path: "Assets/foto4.jpg",
                description: "Mostre para todos que tem conteúdo com sua inteligência e desenvoltura",
            },
        ],
    },
    SampleGroup {
        group: SampleEntry {
            id: "Group-2",
            title: "Mundo acadêmico",
            subtitle: "Frases para engordar seu trabalho",
            image_path: "Assets/foto6.jpg",
            description: "Os estudos preconizados apontam para uma mudança de visão no processo de facilitação do conhecimento promovendo assim, uma postura diferente das coligações",
        },
        items: &[
            SampleEntry {
                id: "Group-2-Item-1",
                title: "Extatas",
                subtitle: "Monografia",
                image_path: "Assets/Matematica.jpg",
                description: "Você irá parecer um gênio de extas",
            },
            SampleEntry {
                id: "Group-2-Item-2",
                title: "Humanas",
                subtitle: "Discursos",
                image_path: "Assets/Humanas.jpg",
                description: "Como encontrar explicação pra tudo",
            },
            SampleEntry {
                id: "Group-2-Item-3",
                title: "Biológicas",
                subtitle: "Introdução",
                image_path: "Assets/felicidade.jpg",
                description: "Não sabe o que escrever na monografia?, seus problemas acabaram",
            },
            SampleEntry {
                id: "Group-2-Item-4",
                title: "Técnólogo",
                subtitle: "Conclusão de Curso",
                image_path: "Assets/Inteligente.jpg",
                description: "Esteja preparado, mostre seu valor, seja o mais inteligente",
            },
        ],
    },
];

impl SampleEntry {
    fn meta(&self) -> EntryMeta {
        EntryMeta::new(self.id, self.title, self.subtitle, self.description)
            .with_image_path(self.image_path)
    }
}

impl Catalog {
    /// Builds a catalog populated with the fixed sample groups.
    pub fn with_sample_data(config: CoreConfig) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(config)?;
        for sample in SAMPLE_GROUPS {
            let mut group = catalog.create_group(sample.group.meta());
            for entry in sample.items {
                group.add_item(catalog.create_item(entry.meta(), sample.group.id));
            }
            catalog.add_group(group);
        }
        info!(
            "event=catalog_sample_load module=catalog status=ok groups={} items={}",
            catalog.all_groups().len(),
            catalog
                .all_groups()
                .iter()
                .map(|group| group.items().len())
                .sum::<usize>()
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::config::CoreConfig;
    use crate::model::entry::Entry;

    #[test]
    fn sample_catalog_has_two_groups_of_four() {
        let catalog = Catalog::with_sample_data(CoreConfig::default()).unwrap();
        let groups = catalog.all_groups();
        assert_eq!(groups.len(), 2);
        for group in groups {
            assert_eq!(group.items().len(), 4);
            assert_eq!(group.top_items().len(), 4);
            for item in group.items() {
                assert_eq!(item.group_id(), group.unique_id());
                assert!(item.stored_content().is_empty());
            }
        }
    }

    #[test]
    fn sample_images_resolve_under_asset_base() {
        let catalog = Catalog::with_sample_data(CoreConfig::default()).unwrap();
        let group = catalog.get_group("Group-1").unwrap();
        let handle = catalog.resolve_image(group).unwrap();
        assert_eq!(handle.uri().as_str(), "ms-appx:///Assets/Dilma.png");
    }
}
