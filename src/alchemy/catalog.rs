//! The built-in world: ingredients, gathering locations, shops and recipes.
//!
//! Everything here is plain data. [`World`](crate::alchemy::world::World) takes
//! ownership of a fresh copy on construction and mutates its own stock from
//! then on.

use serde::{Deserialize, Serialize};

use crate::alchemy::types::{Ingredient, Location, Player, Recipe, Shop};

/// Starting gold for a new alchemist.
pub const STARTING_GOLD: u32 = 500;

/// Default player name.
pub const DEFAULT_PLAYER_NAME: &str = "Новий Алхімік";

/// Static game content, owned by the world once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub ingredients: Vec<Ingredient>,
    pub locations: Vec<Location>,
    pub recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.name == name)
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    pub fn location_mut(&mut self, name: &str) -> Option<&mut Location> {
        self.locations.iter_mut().find(|l| l.name == name)
    }

    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }
}

struct Ingredients {
    herb: Ingredient,
    mushroom: Ingredient,
    crystal: Ingredient,
    root: Ingredient,
    flower: Ingredient,
    berry: Ingredient,
    leaf: Ingredient,
    water: Ingredient,
    salt: Ingredient,
    moss: Ingredient,
    stone: Ingredient,
    dust: Ingredient,
    essence: Ingredient,
}

impl Ingredients {
    fn new() -> Self {
        Self {
            herb: Ingredient::new(
                "Цілюща трава",
                "Поширена трава з невеликими лікувальними властивостями",
                5,
            ),
            mushroom: Ingredient::new("Світний гриб", "Рідкісний гриб, який світиться в темряві", 12),
            crystal: Ingredient::new("Кристал мани", "Кристал, що містить магічну енергію", 25),
            root: Ingredient::new("Корінь женьшеню", "Корінь, що підвищує життєву силу та міць", 8),
            flower: Ingredient::new("Сонцецвіт", "Яскрава квітка, що поглинає сонячне світло", 10),
            berry: Ingredient::new("Ягода беладони", "Темна ягода з таємничими властивостями", 15),
            leaf: Ingredient::new(
                "Срібний лист",
                "Листя з металевим блиском і відновлювальною силою",
                18,
            ),
            water: Ingredient::new(
                "Чиста джерельна вода",
                "Кришталево чиста вода з гірських джерел",
                3,
            ),
            salt: Ingredient::new("Алхімічна сіль", "Очищена сіль з магічними властивостями", 7),
            moss: Ingredient::new("Світний мох", "Рідкісний мох, що випромінює світло", 14),
            stone: Ingredient::new(
                "Фрагмент філософського каменю",
                "Крихітний шматочок легендарного каменю",
                50,
            ),
            dust: Ingredient::new("Пил фей", "Магічний пил, зібраний з місць проживання фей", 30),
            essence: Ingredient::new("Есенція життя", "Концентрована життєва енергія", 35),
        }
    }

    fn all(&self) -> Vec<Ingredient> {
        [
            &self.herb,
            &self.mushroom,
            &self.crystal,
            &self.root,
            &self.flower,
            &self.berry,
            &self.leaf,
            &self.water,
            &self.salt,
            &self.moss,
            &self.stone,
            &self.dust,
            &self.essence,
        ]
        .into_iter()
        .cloned()
        .collect()
    }
}

fn locations(i: &Ingredients) -> Vec<Location> {
    let mut forest = Location::new("Ліс", "Густий ліс з багатьма рослинами та травами");
    forest.add_ingredient(&i.herb, 10);
    forest.add_ingredient(&i.mushroom, 3);
    forest.add_ingredient(&i.berry, 5);
    forest.add_ingredient(&i.leaf, 7);
    forest.add_ingredient(&i.moss, 4);
    forest.add_shop(
        Shop::new(
            "Магазин гнома",
            "В цьому магазині сховані магічні деталі темних лісів, в яких головними жителями залишились старі гноми з Рівії...",
        )
        .with_stock(&i.mushroom, 20, 10)
        .with_stock(&i.moss, 15, 15)
        .with_stock(&i.essence, 10, 20),
    );

    let mut village = Location::new("Село", "Маленьке село з місцевими крамницями");
    village.add_shop(
        Shop::new(
            "Сільська аптека",
            "Затишна аптека, де місцеві травники продають свої найкращі зілля та інгредієнти.",
        )
        .with_stock(&i.herb, 25, 6)
        .with_stock(&i.root, 12, 10)
        .with_stock(&i.berry, 8, 18)
        .with_stock(&i.water, 20, 4),
    );

    let mut university = Location::new(
        "Університет",
        "Місце навчання, де алхіміки діляться знаннями",
    );
    university.add_ingredient(&i.crystal, 2);
    university.add_ingredient(&i.salt, 8);
    university.add_ingredient(&i.stone, 1);
    university.add_shop(
        Shop::new(
            "Академічна крамниця",
            "Елітний магазин, де продаються рідкісні компоненти для складних алхімічних експериментів.",
        )
        .with_stock(&i.crystal, 5, 28)
        .with_stock(&i.salt, 15, 9)
        .with_stock(&i.dust, 3, 35)
        .with_stock(&i.stone, 1, 60),
    );

    let mut mountains = Location::new(
        "Гори",
        "Високі вершини з рідкісними мінералами та рослинами",
    );
    mountains.add_ingredient(&i.flower, 6);
    mountains.add_ingredient(&i.water, 15);
    mountains.add_ingredient(&i.stone, 1);
    mountains.add_shop(
        Shop::new(
            "Гірський торговець",
            "Загартований гном, який торгує рідкісними мінералами та ресурсами, видобутими глибоко в горах.",
        )
        .with_stock(&i.stone, 1, 55)
        .with_stock(&i.crystal, 7, 27)
        .with_stock(&i.flower, 10, 12)
        .with_stock(&i.water, 30, 4),
    );

    let mut swamp = Location::new(
        "Болото",
        "Туманна заболочена місцевість з унікальною флорою",
    );
    swamp.add_ingredient(&i.root, 9);
    swamp.add_ingredient(&i.moss, 8);
    swamp.add_ingredient(&i.essence, 2);
    swamp.add_shop(
        Shop::new(
            "Хатинка відьми",
            "Таємнича хатина на курячих ніжках, де стара відьма торгує загадковими компонентами, зібраними в найтемніших куточках болота.",
        )
        .with_stock(&i.moss, 12, 16)
        .with_stock(&i.berry, 10, 17)
        .with_stock(&i.essence, 4, 40)
        .with_stock(&i.leaf, 8, 20),
    );

    vec![forest, village, university, mountains, swamp]
}

fn recipes(i: &Ingredients) -> Vec<Recipe> {
    vec![
        Recipe::new("Мале зілля здоров'я", "Відновлює невелику кількість очок здоров'я")
            .with_ingredient(&i.herb, 2)
            .with_ingredient(&i.water, 1)
            .with_difficulty(1)
            .with_value(15)
            .with_result_type("Лікування"),
        Recipe::new("Мале зілля мани", "Відновлює невелику кількість магічної енергії")
            .with_ingredient(&i.crystal, 1)
            .with_ingredient(&i.water, 1)
            .with_difficulty(1)
            .with_value(18)
            .with_result_type("Мана"),
        Recipe::new("Велике зілля здоров'я", "Відновлює значну кількість здоров'я")
            .with_ingredient(&i.herb, 3)
            .with_ingredient(&i.root, 1)
            .with_ingredient(&i.leaf, 2)
            .with_ingredient(&i.water, 1)
            .with_difficulty(2)
            .with_value(35)
            .with_result_type("Лікування"),
        Recipe::new("Еліксир сили", "Тимчасово підвищує фізичну силу")
            .with_ingredient(&i.root, 2)
            .with_ingredient(&i.salt, 1)
            .with_ingredient(&i.water, 1)
            .with_difficulty(2)
            .with_value(25)
            .with_result_type("Сила"),
        Recipe::new("Зілля нічного бачення", "Дозволяє бачити в темряві")
            .with_ingredient(&i.mushroom, 2)
            .with_ingredient(&i.moss, 1)
            .with_ingredient(&i.water, 1)
            .with_difficulty(2)
            .with_value(30)
            .with_result_type("Корисність"),
        Recipe::new(
            "Зілля невидимості",
            "Робить користувача частково невидимим на короткий час",
        )
        .with_ingredient(&i.dust, 1)
        .with_ingredient(&i.moss, 2)
        .with_ingredient(&i.berry, 3)
        .with_ingredient(&i.water, 1)
        .with_difficulty(4)
        .with_value(80)
        .with_result_type("Корисність"),
        Recipe::new("Універсальний антидот", "Лікує більшість поширених отрут")
            .with_ingredient(&i.herb, 2)
            .with_ingredient(&i.berry, 1)
            .with_ingredient(&i.salt, 2)
            .with_ingredient(&i.water, 1)
            .with_difficulty(3)
            .with_value(45)
            .with_result_type("Лікування"),
        Recipe::new("Еліксир інтелекту", "Тимчасово підвищує розумові здібності")
            .with_ingredient(&i.crystal, 1)
            .with_ingredient(&i.flower, 2)
            .with_ingredient(&i.salt, 1)
            .with_ingredient(&i.water, 1)
            .with_difficulty(3)
            .with_value(50)
            .with_result_type("Розумовий"),
        Recipe::new("Диво алхіміка", "Тимчасово покращує всі здібності")
            .with_ingredient(&i.stone, 1)
            .with_ingredient(&i.essence, 1)
            .with_ingredient(&i.dust, 1)
            .with_ingredient(&i.root, 2)
            .with_ingredient(&i.leaf, 2)
            .with_ingredient(&i.water, 1)
            .with_difficulty(5)
            .with_value(150)
            .with_result_type("Посилення"),
    ]
}

/// Build a fresh copy of the built-in content.
pub fn canonical_catalog() -> Catalog {
    let ingredients = Ingredients::new();
    Catalog {
        locations: locations(&ingredients),
        recipes: recipes(&ingredients),
        ingredients: ingredients.all(),
    }
}

/// A new alchemist with the starter satchel and the two beginner recipes.
pub fn starter_player(name: &str, gold: u32, catalog: &Catalog) -> Player {
    let mut player = Player::new(name, gold);
    let i = Ingredients::new();
    player.add_ingredient(&i.herb.name, 3);
    player.add_ingredient(&i.mushroom.name, 1);
    player.add_ingredient(&i.water.name, 4);
    player.add_ingredient(&i.flower.name, 4);
    player.add_ingredient(&i.salt.name, 4);
    player.add_ingredient(&i.crystal.name, 4);
    for recipe in catalog.recipes.iter().take(2) {
        player.learn_recipe(&recipe.name);
    }
    player
}
